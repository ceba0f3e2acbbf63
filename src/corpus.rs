use std::{
    io::Read,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::trie::RankedTrie;

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// On-disk layout of a word/frequency corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusFormat {
    /// `{ "apple": 10, banana: 7 }`
    Braces,
    /// `word,count` with a header row.
    Csv,
}

impl CorpusFormat {
    /// Guess the format from a file extension. Anything that isn't .csv is braces.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Braces,
        }
    }
}

/// A corpus file to load at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusSource {
    pub path: PathBuf,
    #[serde(default)]
    pub format: Option<CorpusFormat>,
}

impl CorpusSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path, format: None }
    }

    pub fn format(&self) -> CorpusFormat {
        self.format
            .unwrap_or_else(|| CorpusFormat::from_path(&self.path))
    }
}

/// A single (word, data frequency) pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CorpusEntry {
    pub word: String,
    pub count: u64,
}

/// Read a corpus file and insert every entry into the trie. Returns the number
/// of entries inserted. On error, nothing is inserted.
pub fn load_into(trie: &mut RankedTrie, src: &CorpusSource) -> Result<usize, CorpusError> {
    let file = std::fs::File::open(&src.path)?;
    let entries = read(file, src.format())?;

    for e in &entries {
        trie.insert(&e.word, e.count);
    }

    log::info!(
        "loaded {} entries from {}",
        entries.len(),
        src.path.display()
    );
    Ok(entries.len())
}

/// Parse a corpus from any reader.
pub fn read<R: Read>(mut r: R, format: CorpusFormat) -> Result<Vec<CorpusEntry>, CorpusError> {
    match format {
        CorpusFormat::Braces => {
            let mut s = String::new();
            r.read_to_string(&mut s)?;
            Ok(parse_braces(&s))
        }
        CorpusFormat::Csv => read_csv(r),
    }
}

/// Parse `{ key: value, ... }` text. Keys may be single or double quoted,
/// values are unsigned integers. Malformed entries are skipped.
pub fn parse_braces(s: &str) -> Vec<CorpusEntry> {
    let body = s.trim();
    let body = body.strip_prefix('{').unwrap_or(body);
    let body = body.strip_suffix('}').unwrap_or(body);

    let mut out = Vec::new();
    for (n, item) in body.split(',').enumerate() {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }

        let Some((key, val)) = item.rsplit_once(':') else {
            log::warn!("entry {}: no ':' separator in '{}', skipping", n + 1, item);
            continue;
        };

        let word = unquote(key.trim());
        if word.is_empty() {
            log::warn!("entry {}: empty word, skipping", n + 1);
            continue;
        }

        match val.trim().parse::<u64>() {
            Ok(count) => out.push(CorpusEntry {
                word: word.to_string(),
                count,
            }),
            Err(e) => {
                log::warn!(
                    "entry {}: invalid frequency '{}' for '{}': {}",
                    n + 1,
                    val.trim(),
                    word,
                    e
                );
            }
        }
    }

    out
}

/// Read `word,count` rows. Rows that don't deserialize are skipped.
pub fn read_csv<R: Read>(r: R) -> Result<Vec<CorpusEntry>, CorpusError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(r);

    let mut out = Vec::new();
    for (n, row) in reader.deserialize::<CorpusEntry>().enumerate() {
        match row {
            Ok(e) if !e.word.is_empty() => out.push(e),
            Ok(_) => log::warn!("line {}: empty word, skipping", n + 2),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => log::warn!("line {}: {}, skipping", n + 2, e),
        }
    }

    Ok(out)
}

fn unquote(s: &str) -> &str {
    for q in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            return &s[1..s.len() - 1];
        }
    }
    s
}
