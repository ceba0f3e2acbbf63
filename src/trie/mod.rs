//! Prefix trie that keeps a precomputed top-K ranking at every node so that
//! prefix suggestions are a single walk plus a copy of that node's ranking.

mod ranking;

use ranking::{Entry, TopWords};

use std::{collections::HashMap, sync::Arc};

use serde::Serialize;

/// A suggested word with its ranking counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub word: String,
    pub search_frequency: u64,
    pub data_frequency: u64,
}

impl From<&Entry> for Suggestion {
    fn from(e: &Entry) -> Self {
        Self {
            word: e.word.to_string(),
            search_frequency: e.search_frequency,
            data_frequency: e.data_frequency,
        }
    }
}

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,

    // Counters are only meaningful on word-end nodes.
    data_frequency: u64,
    search_frequency: u64,

    /// Set iff a word terminates here. Shared with every ranking that lists the word.
    word: Option<Arc<str>>,

    /// Best words anywhere in this subtree.
    top_words: TopWords,
}

impl TrieNode {
    fn is_word_end(&self) -> bool {
        self.word.is_some()
    }

    fn entry(&self) -> Option<Entry> {
        let word = self.word.as_ref()?;
        Some(Entry::new(
            word.clone(),
            self.search_frequency,
            self.data_frequency,
        ))
    }
}

/// Autocomplete trie ranking words by search frequency, then data frequency.
#[derive(Debug, Default)]
pub struct RankedTrie {
    root: TrieNode,
    num_words: usize,
}

impl RankedTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, adding `data_frequency` to its accumulated corpus weight.
    /// Re-inserting a word accumulates weight. Empty words are ignored.
    pub fn insert(&mut self, word: &str, data_frequency: u64) {
        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }

        if node.word.is_none() {
            node.word = Some(Arc::from(word));
            self.num_words += 1;
        }
        node.data_frequency = node.data_frequency.saturating_add(data_frequency);

        if let Some(entry) = node.entry() {
            self.rank_along_path(&entry);
        }
    }

    /// Record that a user picked `word`. Returns false (and changes nothing) if the
    /// word is not in the trie.
    pub fn record_selection(&mut self, word: &str) -> bool {
        let entry = match self.find_node_mut(word) {
            Some(node) if node.is_word_end() => {
                node.search_frequency = node.search_frequency.saturating_add(1);
                node.entry()
            }
            _ => None,
        };

        match entry {
            Some(entry) => {
                self.rank_along_path(&entry);
                true
            }
            None => false,
        }
    }

    /// Best words starting with `prefix`, highest-ranked first. At most [`ranking::TOP_K`].
    pub fn suggest(&self, prefix: &str) -> Vec<Suggestion> {
        match self.find_node(prefix) {
            Some(node) => node.top_words.iter().map(Suggestion::from).collect(),
            None => Vec::new(),
        }
    }

    pub fn is_valid_prefix(&self, prefix: &str) -> bool {
        self.find_node(prefix).is_some()
    }

    pub fn is_complete_word(&self, word: &str) -> bool {
        self.find_node(word).is_some_and(TrieNode::is_word_end)
    }

    /// Current counters of a stored word.
    pub fn get(&self, word: &str) -> Option<Suggestion> {
        self.find_node(word)
            .and_then(TrieNode::entry)
            .map(|e| Suggestion::from(&e))
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.num_words
    }

    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    fn find_node_mut(&mut self, prefix: &str) -> Option<&mut TrieNode> {
        let mut node = &mut self.root;
        for ch in prefix.chars() {
            node = node.children.get_mut(&ch)?;
        }
        Some(node)
    }

    /// Re-rank `entry` at the root and every node down to its word end.
    fn rank_along_path(&mut self, entry: &Entry) {
        let mut node = &mut self.root;
        node.top_words.update(entry.clone());

        for ch in entry.word.chars() {
            node = match node.children.get_mut(&ch) {
                Some(n) => n,
                None => return,
            };
            node.top_words.update(entry.clone());
        }
    }
}
