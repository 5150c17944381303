//! Prefix index over keyword labels.
//!
//! A character trie supporting insertion and lazy prefix enumeration.
//! Children are kept in a `BTreeMap` so enumeration order is the
//! ascending code-point order of the stored words, independent of
//! insertion order.

use std::collections::BTreeMap;

/// One trie node: child map plus end-of-word marker.
#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
}

/// Character trie over inserted keyword labels.
#[derive(Debug, Default, Clone)]
pub struct PrefixIndex {
    root: TrieNode,
    words: usize,
}

impl PrefixIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, creating any missing path nodes.
    ///
    /// Idempotent: re-inserting an existing word changes nothing.
    /// Inserting the empty string marks the root terminal.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.words += 1;
        }
    }

    /// Enumerate all inserted words starting with `prefix`, lazily,
    /// in ascending code-point order.
    ///
    /// An unreachable prefix yields an empty iterator, not an error.
    /// `search("")` enumerates the whole index.
    pub fn search<'a>(&'a self, prefix: &str) -> PrefixMatches<'a> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return PrefixMatches { stack: Vec::new() },
            }
        }
        PrefixMatches {
            stack: vec![(node, prefix.to_string())],
        }
    }

    /// Number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Whether no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}

/// Lazy depth-first enumeration of words below a prefix.
///
/// Restartable by calling [`PrefixIndex::search`] again (or cloning).
#[derive(Debug, Clone)]
pub struct PrefixMatches<'a> {
    stack: Vec<(&'a TrieNode, String)>,
}

impl Iterator for PrefixMatches<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((node, word)) = self.stack.pop() {
            // Reverse push so the smallest child is popped first.
            for (&ch, child) in node.children.iter().rev() {
                let mut next = word.clone();
                next.push(ch);
                self.stack.push((child, next));
            }
            if node.terminal {
                return Some(word);
            }
        }
        None
    }
}
