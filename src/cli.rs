use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "suggestrix")]
#[command(about = "suggestrix - Ranked prefix autocomplete over a word frequency corpus.")]
#[command(version = env!("VERSION"))]
pub struct Cli {
    /// Path to one or more config files (merged in order).
    #[arg(long, action = clap::ArgAction::Append)]
    pub config: Vec<PathBuf>,

    /// Additional corpus files to load after the configured ones. The format is
    /// inferred from the extension (.csv or braces).
    #[arg(long, action = clap::ArgAction::Append)]
    pub corpus: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a sample config file.
    NewConfig {
        /// Output path for config file.
        #[arg(short, long, default_value = "config.toml")]
        path: PathBuf,
    },

    /// Load the corpora and print the ranked suggestions for a prefix.
    Query {
        /// Prefix to complete. Empty prints the overall top words.
        #[arg(default_value = "")]
        prefix: String,

        /// Record a selection of this word before querying. Repeatable.
        #[arg(long, action = clap::ArgAction::Append)]
        select: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_query_with_selections() {
        let cli = Cli::try_parse_from([
            "suggestrix",
            "--corpus",
            "a.csv",
            "--corpus",
            "b.txt",
            "query",
            "ap",
            "--select",
            "apple",
            "--select",
            "apple",
        ])
        .expect("parse");

        assert!(cli.config.is_empty());
        assert_eq!(cli.corpus, vec![PathBuf::from("a.csv"), PathBuf::from("b.txt")]);
        match cli.command {
            Some(Commands::Query { prefix, select }) => {
                assert_eq!(prefix, "ap");
                assert_eq!(select, vec!["apple", "apple"]);
            }
            _ => panic!("expected query"),
        }
    }

    #[test]
    fn no_subcommand_runs_server() {
        let cli = Cli::try_parse_from(["suggestrix", "--config", "c.toml"]).expect("parse");
        assert_eq!(cli.config, vec![PathBuf::from("c.toml")]);
        assert!(cli.command.is_none());
    }
}
