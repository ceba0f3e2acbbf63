use std::path::PathBuf;

use crate::{
    corpus::{self, CorpusSource},
    models::Config,
    trie::RankedTrie,
};

/// Initialize logger.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            use std::io::Write;
            let level = if record.level() != log::Level::Info {
                format!("[{}] ", record.level())
            } else {
                String::new()
            };
            writeln!(
                buf,
                "{} {}:{} {}{}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                level,
                record.args()
            )
        })
        .init();
}

/// Configured corpora followed by the ones passed on the command line.
pub fn init_corpora(config: &Config, extra: &[PathBuf]) -> Vec<CorpusSource> {
    let mut out = config.corpus.clone();
    out.extend(extra.iter().cloned().map(CorpusSource::new));

    if out.is_empty() {
        log::warn!("no corpus files configured, starting with an empty trie");
    }
    out
}

/// Build the trie from all corpora. A corpus that fails to load is logged and
/// skipped.
pub fn init_trie(sources: &[CorpusSource]) -> RankedTrie {
    let mut trie = RankedTrie::new();

    for src in sources {
        log::info!(
            "loading corpus: {} ({:?})",
            src.path.display(),
            src.format()
        );
        if let Err(e) = corpus::load_into(&mut trie, src) {
            log::error!("error loading corpus {}: {}", src.path.display(), e);
        }
    }

    if trie.is_empty() {
        log::warn!("no words loaded, suggestions will be empty");
    } else {
        log::info!("trie built with {} words", trie.len());
    }
    trie
}
