use std::path::{Path, PathBuf};

use crate::models::Config;

const SAMPLE_CONFIG: &str = include_str!("../config.sample.toml");

/// Load and merge one or more config files. With no files, defaults are used.
pub fn load_all(paths: &[PathBuf]) -> Config {
    let mut config: Option<Config> = None;

    for path in paths {
        log::info!("loading config: {}", path.display());
        match read_file(path) {
            Ok(c) => {
                if let Some(ref mut existing) = config {
                    // Merge configs.
                    merge(existing, c);
                } else {
                    config = Some(c);
                }
            }
            Err(e) => {
                log::error!("error loading config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    config.unwrap_or_else(|| {
        log::info!("no config files specified, using defaults");
        Config::default()
    })
}

/// Generate sample config file.
pub fn generate_sample(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() {
        return Err("config file already exists".into());
    }
    std::fs::write(path, SAMPLE_CONFIG)?;
    Ok(())
}

/// Load configuration from a given TOML file.
fn read_file(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

fn parse(content: &str) -> Result<Config, Box<dyn std::error::Error>> {
    let cfg: Config = toml::from_str(content)?;
    Ok(cfg)
}

/// Merge the given src config into the dest config struct.
fn merge(dest: &mut Config, src: Config) {
    if !src.app.address.is_empty() {
        dest.app.address = src.app.address;
    }
    if src.app.select_on_exact_match.is_some() {
        dest.app.select_on_exact_match = src.app.select_on_exact_match;
    }

    // Corpora from every file are loaded, in order.
    dest.corpus.extend(src.corpus);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusFormat;

    #[test]
    fn sample_config_parses() {
        let cfg = parse(SAMPLE_CONFIG).expect("sample config");
        assert_eq!(cfg.app.address, "127.0.0.1:3000");
        assert_eq!(cfg.app.select_on_exact_match, Some(false));
        assert_eq!(cfg.corpus.len(), 1);
        assert_eq!(cfg.corpus[0].format(), CorpusFormat::Csv);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = parse("").expect("empty config");
        assert!(cfg.app.address.is_empty());
        assert!(cfg.corpus.is_empty());
    }

    #[test]
    fn merge_overrides_and_appends() {
        let mut dest = parse(
            r#"
            [app]
            address = ":3000"

            [[corpus]]
            path = "a.csv"
            "#,
        )
        .expect("dest");

        let src = parse(
            r#"
            [app]
            select_on_exact_match = true

            [[corpus]]
            path = "b.txt"
            format = "braces"
            "#,
        )
        .expect("src");

        merge(&mut dest, src);
        assert_eq!(dest.app.address, ":3000");
        assert_eq!(dest.app.select_on_exact_match, Some(true));

        let paths: Vec<_> = dest.corpus.iter().map(|c| c.path.clone()).collect();
        assert_eq!(paths, vec![PathBuf::from("a.csv"), PathBuf::from("b.txt")]);
    }

    #[test]
    fn merge_keeps_unset_flags() {
        let mut dest = parse("[app]\nselect_on_exact_match = true\n").expect("dest");
        let src = parse("[app]\naddress = \":4000\"\n").expect("src");

        merge(&mut dest, src);
        assert_eq!(dest.app.address, ":4000");
        assert_eq!(dest.app.select_on_exact_match, Some(true));

        let src = parse("[app]\nselect_on_exact_match = false\n").expect("src");
        merge(&mut dest, src);
        assert_eq!(dest.app.select_on_exact_match, Some(false));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(parse("[[corpus]]\npath = \"a\"\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn generate_refuses_to_overwrite() {
        let path = std::env::temp_dir().join(format!("suggestrix-cfg-{}.toml", std::process::id()));
        std::fs::remove_file(&path).ok();

        generate_sample(&path).expect("generate");
        assert!(generate_sample(&path).is_err());

        let written = std::fs::read_to_string(&path).expect("read");
        std::fs::remove_file(&path).ok();
        assert_eq!(written, SAMPLE_CONFIG);
    }
}
