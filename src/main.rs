mod cli;
mod config;
mod corpus;
mod handlers;
mod http;
mod init;
mod models;
mod trie;

use std::sync::{Arc, RwLock};

use clap::Parser;

use cli::Commands;
use handlers::{Consts, Ctx};

#[cfg(target_env = "musl")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() {
    init::init_logger();

    let cli = cli::Cli::parse();

    // Handle CLI flags.
    if let Some(cmd) = cli.command {
        match cmd {
            // Generate a new config file.
            Commands::NewConfig { path } => {
                match config::generate_sample(&path) {
                    Ok(_) => {
                        log::info!("config file generated: {}", path.display());
                    }
                    Err(e) => {
                        log::error!("error generating config: {}", e);
                        std::process::exit(1);
                    }
                }
                return;
            }

            // Build the trie and print suggestions for one prefix.
            Commands::Query { prefix, select } => {
                let config = config::load_all(&cli.config);
                let mut trie = init::init_trie(&init::init_corpora(&config, &cli.corpus));

                for word in &select {
                    if !trie.record_selection(word) {
                        log::warn!("unknown word '{}', selection ignored", word);
                    }
                }

                let suggestions = trie.suggest(&prefix);
                if suggestions.is_empty() {
                    println!("no suggestions found for '{}'", prefix);
                }
                for s in suggestions {
                    println!(
                        "{}\tsearch={}\tdata={}",
                        s.word, s.search_frequency, s.data_frequency
                    );
                }
                return;
            }
        }
    }

    // Load config.
    let config = config::load_all(&cli.config);

    // Build the trie from every corpus before serving.
    let trie = init::init_trie(&init::init_corpora(&config, &cli.corpus));

    // Setup the global app context used in HTTP handlers.
    let ctx = Arc::new(Ctx {
        trie: RwLock::new(trie),
        consts: Consts {
            select_on_exact_match: config.app.select_on_exact_match.unwrap_or(false),
        },
    });

    // Start the HTTP server.
    let routes = http::init_handlers(ctx);
    let addr = if config.app.address.is_empty() {
        models::DEFAULT_ADDRESS.to_string()
    } else {
        config.app.address
    };

    log::info!("starting server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            log::error!("error listening on {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, routes).await {
        log::error!("server error: {}", e);
        std::process::exit(1);
    }
}
