//! An in-memory word dictionary on a character-keyed trie, with prefix
//! autocomplete and Levenshtein edit distance.

pub mod distance;
pub mod error;
pub mod loader;
pub mod trie;

pub use distance::{
    Suggestion, bounded_edit_distance, closest_words, edit_distance, edit_distance_dp,
};
pub use error::{DictionaryError, Result};
pub use loader::{LoadStats, LoaderConfig};
pub use trie::{Dictionary, TrieNode};
