//! Character-keyed prefix tree holding a lowercase vocabulary.
//!
//! Words sharing a prefix share the nodes for that prefix, so inserting
//! "mini" and then "miniature" only appends the five nodes for "ature".
//! All input is lowered with ASCII rules before it touches the tree, which
//! makes membership and prefix queries case-insensitive.

use std::collections::HashMap;

use log::warn;
use rayon::prelude::*;

use crate::error::{DictionaryError, Result};

/// A single node of the trie.
///
/// Each node owns its children outright; the tree only ever grows.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    key: Option<char>,
    children: HashMap<char, TrieNode>,
    is_end_of_word: bool,
}

impl TrieNode {
    fn with_key(key: char) -> Self {
        TrieNode {
            key: Some(key),
            ..TrieNode::default()
        }
    }

    /// The character on the edge from the parent. `None` for the root.
    pub fn key(&self) -> Option<char> {
        self.key
    }

    /// Whether the path from the root to this node spells a stored word.
    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    pub fn child(&self, key: char) -> Option<&TrieNode> {
        self.children.get(&key)
    }

    /// Children in no particular order.
    pub fn children(&self) -> impl Iterator<Item = &TrieNode> {
        self.children.values()
    }

    // Depth-first walk; `path` holds the word spelled so far and is restored
    // before returning. Recursion depth is the length of the longest word
    // below this node.
    fn collect_into(&self, path: &mut String, words: &mut Vec<String>) {
        if self.is_end_of_word {
            words.push(path.clone());
        }
        for (&key, child) in &self.children {
            path.push(key);
            child.collect_into(path, words);
            path.pop();
        }
    }
}

/// An in-memory word dictionary backed by a [`TrieNode`] tree.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    root: TrieNode,
    len: usize,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Store `word`, lowercased.
    ///
    /// Returns `Ok(true)` if the word is new and `Ok(false)` if it was already
    /// present. The empty string is rejected with
    /// [`DictionaryError::EmptyWord`] and the tree is left untouched.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        if word.is_empty() {
            return Err(DictionaryError::EmptyWord);
        }

        let mut node = &mut self.root;
        for key in word.chars().map(|c| c.to_ascii_lowercase()) {
            node = node
                .children
                .entry(key)
                .or_insert_with(|| TrieNode::with_key(key));
        }

        // The flag is only ever raised, never cleared.
        if node.is_end_of_word {
            return Ok(false);
        }
        node.is_end_of_word = true;
        self.len += 1;
        Ok(true)
    }

    /// The empty string is never a word.
    pub fn contains(&self, word: &str) -> bool {
        self.find_node(word)
            .is_some_and(|node| node.is_end_of_word)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find_node(prefix).is_some()
    }

    /// The node reached by following `prefix` from the root, whether or not
    /// it ends a word. The empty prefix yields the root.
    pub fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .map(|c| c.to_ascii_lowercase())
            .try_fold(&self.root, |node, key| node.children.get(&key))
    }

    /// Every stored word that has `prefix` as a prefix, in ascending order.
    ///
    /// An empty prefix enumerates the whole dictionary. The walk recurses once
    /// per character, as does dropping the tree, so stored words must stay
    /// well short of the thread's stack limit (a few thousand characters).
    pub fn collect(&self, prefix: &str) -> Vec<String> {
        let Some(anchor) = self.find_node(prefix) else {
            return Vec::new();
        };

        let mut path = prefix.to_ascii_lowercase();
        let mut words = Vec::new();
        anchor.collect_into(&mut path, &mut words);
        words.sort_unstable();
        words
    }

    /// Completions of `prefix`, each reported as the full word, in ascending
    /// order.
    ///
    /// This answers "what comes after `prefix`": when `prefix` is itself a
    /// stored word its zero-length completion is dropped, so
    /// `autocomplete("mini")` yields `["miniature"]` and a stored word with no
    /// extensions yields nothing. Use [`contains`](Self::contains) to test the
    /// prefix itself.
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        let Some(anchor) = self.find_node(prefix) else {
            return Vec::new();
        };

        let mut suffixes = Vec::new();
        anchor.collect_into(&mut String::new(), &mut suffixes);
        suffixes.sort_unstable();
        if suffixes.first().is_some_and(String::is_empty) {
            suffixes.remove(0);
        }

        let prefix = prefix.to_ascii_lowercase();
        suffixes
            .into_iter()
            .map(|suffix| format!("{prefix}{suffix}"))
            .collect()
    }

    /// Run [`autocomplete`](Self::autocomplete) for each prefix in parallel.
    pub fn autocomplete_many<S>(&self, prefixes: &[S]) -> Vec<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        prefixes
            .par_iter()
            .map(|prefix| self.autocomplete(prefix.as_ref()))
            .collect()
    }
}

impl<S: AsRef<str>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            if let Err(e) = self.insert(word.as_ref()) {
                warn!("skipping word: {e}");
            }
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut dictionary = Dictionary::new();
        dictionary.extend(words);
        dictionary
    }
}
