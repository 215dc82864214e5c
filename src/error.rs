//! Error types for dictionary population.
//!
//! Queries against a [`Dictionary`](crate::Dictionary) never fail; only
//! insertion of an empty word and the loaders can produce an error.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The empty string cannot be stored as a word.
    #[error("cannot insert an empty word")]
    EmptyWord,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid loader config: {0}")]
    Config(#[from] serde_json::Error),

    /// CSV delimiters must be a single ASCII character.
    #[error("delimiter {0:?} is not an ASCII character")]
    InvalidDelimiter(char),

    /// A CSV record had fewer fields than the configured word column.
    #[error("record on line {line} has no column {column}")]
    MissingColumn { line: u64, column: usize },
}

pub type Result<T> = std::result::Result<T, DictionaryError>;
