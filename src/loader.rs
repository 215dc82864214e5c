//! Bulk population of a [`Dictionary`] from CSV files and plain word lists.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{DictionaryError, Result};
use crate::trie::Dictionary;

/// How to read words out of a CSV source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Must be ASCII.
    pub delimiter: char,
    pub has_header: bool,
    /// Zero-based index of the field holding the word.
    pub column: usize,
    pub ascii_only: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            delimiter: ',',
            has_header: true,
            column: 0,
            ascii_only: true,
        }
    }
}

impl LoaderConfig {
    /// Read a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or(DictionaryError::InvalidDelimiter(self.delimiter))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub inserted: usize,
    pub duplicates: usize,
    /// Empty or filtered-out entries.
    pub skipped: usize,
}

impl LoadStats {
    fn record(&mut self, dictionary: &mut Dictionary, word: &str) -> Result<()> {
        if dictionary.insert(word)? {
            self.inserted += 1;
        } else {
            self.duplicates += 1;
        }
        Ok(())
    }
}

/// Insert the configured column of every CSV record into `dictionary`.
pub fn load_csv<R: Read>(
    dictionary: &mut Dictionary,
    reader: R,
    config: &LoaderConfig,
) -> Result<LoadStats> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(config.delimiter_byte()?)
        .has_headers(config.has_header)
        .flexible(true)
        .from_reader(reader);

    let mut stats = LoadStats::default();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |pos| pos.line());
        let word = record
            .get(config.column)
            .ok_or(DictionaryError::MissingColumn {
                line,
                column: config.column,
            })?;

        if word.is_empty() {
            warn!("line {line}: empty word, skipping");
            stats.skipped += 1;
            continue;
        }
        if config.ascii_only && !word.is_ascii() {
            debug!("line {line}: non-ASCII word {word:?}, skipping");
            stats.skipped += 1;
            continue;
        }
        stats.record(dictionary, word)?;
    }

    debug!(
        "loaded csv: {} inserted, {} duplicates, {} skipped",
        stats.inserted, stats.duplicates, stats.skipped
    );
    Ok(stats)
}

pub fn load_csv_file<P: AsRef<Path>>(
    dictionary: &mut Dictionary,
    path: P,
    config: &LoaderConfig,
) -> Result<LoadStats> {
    let path = path.as_ref();
    debug!("loading csv dictionary from {}", path.display());
    load_csv(dictionary, File::open(path)?, config)
}

/// Insert one word per line. Lines are trimmed and blank lines skipped.
pub fn load_word_list<R: BufRead>(dictionary: &mut Dictionary, reader: R) -> Result<LoadStats> {
    let mut stats = LoadStats::default();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            stats.skipped += 1;
            continue;
        }
        stats.record(dictionary, word)?;
    }

    debug!(
        "loaded word list: {} inserted, {} duplicates, {} skipped",
        stats.inserted, stats.duplicates, stats.skipped
    );
    Ok(stats)
}

pub fn load_word_list_file<P: AsRef<Path>>(
    dictionary: &mut Dictionary,
    path: P,
) -> Result<LoadStats> {
    let path = path.as_ref();
    debug!("loading word list from {}", path.display());
    load_word_list(dictionary, BufReader::new(File::open(path)?))
}

impl Dictionary {
    pub fn from_csv_file<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<Self> {
        let mut dictionary = Dictionary::new();
        load_csv_file(&mut dictionary, path, config)?;
        Ok(dictionary)
    }

    pub fn from_word_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut dictionary = Dictionary::new();
        load_word_list_file(&mut dictionary, path)?;
        Ok(dictionary)
    }
}
