use std::{cmp::Ordering, sync::Arc};

/// Max number of words ranked at every node.
pub const TOP_K: usize = 5;

/// A ranked word and the counters it was ranked with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: Arc<str>,
    pub search_frequency: u64,
    pub data_frequency: u64,
}

impl Entry {
    pub fn new(word: Arc<str>, search_frequency: u64, data_frequency: u64) -> Self {
        Self {
            word,
            search_frequency,
            data_frequency,
        }
    }
}

/// Entries sort best-first: search frequency desc, data frequency desc, word asc.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .search_frequency
            .cmp(&self.search_frequency)
            .then_with(|| other.data_frequency.cmp(&self.data_frequency))
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Bounded best-first ranking of at most [`TOP_K`] distinct words.
#[derive(Debug, Default)]
pub struct TopWords {
    entries: Vec<Entry>,
}

impl TopWords {
    /// Replace any stale entry for the same word, insert the new one in rank order
    /// and drop whatever falls off the end.
    pub fn update(&mut self, entry: Entry) {
        if let Some(pos) = self.entries.iter().position(|e| e.word == entry.word) {
            self.entries.remove(pos);
        }

        let pos = self.entries.partition_point(|e| e < &entry);
        self.entries.insert(pos, entry);
        self.entries.truncate(TOP_K);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}
