//! Sentiment and stop-word dictionaries.
//!
//! Word lists are plain text files with one entry per line. They are decoded
//! as ISO-8859-1, so legacy Latin-1 lists load without errors. Every entry is
//! trimmed and lowercased, which makes membership tests case-insensitive.
//!
//! # Example
//!
//! ```rust
//! use mensura_core::{Dictionaries, WordSet};
//!
//! let dictionaries = Dictionaries::new(
//!     WordSet::from_words(["Good", "great"]),
//!     WordSet::from_words(["bad"]),
//!     WordSet::from_words(["the", "a"]),
//! );
//! assert!(dictionaries.positive.contains("GOOD"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::mem::decode_latin1;

use crate::{MensuraError, Result};

/// Directory (under the data directory) holding the sentiment lists.
pub const MASTER_DICTIONARY_DIR: &str = "MasterDictionary";
/// Directory (under the data directory) holding the stop-word lists.
pub const STOP_WORDS_DIR: &str = "StopWords";

/// An immutable set of lowercase words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Builds a set from arbitrary entries. Blank entries are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parses list content split on `\n`, `\r\n` or a bare `\r`.
    pub fn parse(content: &str) -> Self {
        Self::from_words(content.split(['\r', '\n']))
    }

    /// Loads a single word list from disk.
    ///
    /// # Errors
    ///
    /// Returns [`MensuraError::DictionaryNotFound`] if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(MensuraError::DictionaryNotFound(path.to_path_buf()));
        }
        let bytes = fs::read(path)?;
        // ISO-8859-1: every byte maps to the code point of the same value
        let content = decode_latin1(&bytes);
        let set = Self::parse(&content);
        tracing::debug!(path = %path.display(), entries = set.len(), "loaded word list");
        Ok(set)
    }

    /// Set union of several lists.
    pub fn union<I: IntoIterator<Item = WordSet>>(sets: I) -> Self {
        let mut words = HashSet::new();
        for set in sets {
            words.extend(set.words);
        }
        Self { words }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Locations of the word lists making up a [`Dictionaries`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryPaths {
    pub positive: PathBuf,
    pub negative: PathBuf,
    /// Directory whose `*.txt` files are unioned into the stop-word set.
    pub stop_words_dir: PathBuf,
}

impl DictionaryPaths {
    /// Standard layout: `MasterDictionary/{positive,negative}-words.txt`
    /// and `StopWords/*.txt` under `data_dir`.
    pub fn from_data_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        let master = data_dir.join(MASTER_DICTIONARY_DIR);
        Self {
            positive: master.join("positive-words.txt"),
            negative: master.join("negative-words.txt"),
            stop_words_dir: data_dir.join(STOP_WORDS_DIR),
        }
    }

    /// Lists the stop-word files in sorted order.
    fn stop_word_files(&self) -> Result<Vec<PathBuf>> {
        if !self.stop_words_dir.is_dir() {
            return Err(MensuraError::DictionaryNotFound(self.stop_words_dir.clone()));
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.stop_words_dir)? {
            let path = entry?.path();
            let is_txt = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
            if is_txt && path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

/// The three word sets used for scoring.
///
/// Constructed once and passed by reference into the metrics engine. The
/// value is immutable, so it can be shared freely across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionaries {
    pub positive: WordSet,
    pub negative: WordSet,
    pub stop: WordSet,
}

impl Dictionaries {
    pub fn new(positive: WordSet, negative: WordSet, stop: WordSet) -> Self {
        Self { positive, negative, stop }
    }

    /// Loads all word lists.
    ///
    /// # Errors
    ///
    /// Returns [`MensuraError::DictionaryNotFound`] if any list or the
    /// stop-word directory is missing.
    pub fn load(paths: &DictionaryPaths) -> Result<Self> {
        let positive = WordSet::load(&paths.positive)?;
        let negative = WordSet::load(&paths.negative)?;

        let stop_lists = paths
            .stop_word_files()?
            .iter()
            .map(|path| WordSet::load(path))
            .collect::<Result<Vec<_>>>()?;
        let stop = WordSet::union(stop_lists);

        tracing::info!(
            positive = positive.len(),
            negative = negative.len(),
            stop = stop.len(),
            "dictionaries loaded"
        );

        Ok(Self { positive, negative, stop })
    }

    /// Shorthand for `Dictionaries::load(&DictionaryPaths::from_data_dir(dir))`.
    pub fn from_data_dir(data_dir: impl AsRef<Path>) -> Result<Self> {
        Self::load(&DictionaryPaths::from_data_dir(data_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_layout(dir: &Path) {
        let master = dir.join(MASTER_DICTIONARY_DIR);
        let stop = dir.join(STOP_WORDS_DIR);
        fs::create_dir_all(&master).unwrap();
        fs::create_dir_all(&stop).unwrap();
        fs::write(master.join("positive-words.txt"), "good\nGreat\n\n  happy  \n").unwrap();
        fs::write(master.join("negative-words.txt"), "bad\nsad\nbad\n").unwrap();
        fs::write(stop.join("StopWords_Generic.txt"), "THE\nand\n").unwrap();
        fs::write(stop.join("StopWords_Names.TXT"), "smith\nand\n").unwrap();
        fs::write(stop.join("README.md"), "ignored\n").unwrap();
    }

    #[test]
    fn test_word_set_case_insensitive() {
        let set = WordSet::from_words(["Apple", "banana"]);
        assert!(set.contains("apple"));
        assert!(set.contains("APPLE"));
        assert!(set.contains("Banana"));
        assert!(!set.contains("cherry"));
    }

    #[test]
    fn test_word_set_duplicates_collapse() {
        let set = WordSet::from_words(["word", "Word", "WORD ", ""]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_union() {
        let set = WordSet::union([WordSet::from_words(["a", "b"]), WordSet::from_words(["b", "c"])]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_load_latin1_list() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("list.txt");
        fs::write(&path, b"caf\xe9\nna\xefve\n").unwrap();

        let set = WordSet::load(&path).unwrap();
        assert!(set.contains("café"));
        assert!(set.contains("naïve"));
    }

    #[test]
    fn test_load_c1_bytes_stay_control_characters() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("list.txt");
        fs::write(&path, b"\x9aa\n").unwrap();

        let set = WordSet::load(&path).unwrap();
        assert!(!set.contains("ša"));
        assert!(set.contains("\u{9a}a"));
    }

    #[test]
    fn test_parse_mixed_line_endings() {
        let set = WordSet::parse("alpha\rbeta\r\ngamma\ndelta");
        assert_eq!(set.len(), 4);
        assert!(set.contains("beta"));
        assert!(set.contains("gamma"));
    }

    #[test]
    fn test_load_layout() {
        let tmp = TempDir::new().unwrap();
        write_layout(tmp.path());

        let dictionaries = Dictionaries::from_data_dir(tmp.path()).unwrap();
        assert_eq!(dictionaries.positive.len(), 3);
        assert_eq!(dictionaries.negative.len(), 2);
        assert_eq!(dictionaries.stop.len(), 3);
        assert!(dictionaries.stop.contains("the"));
        assert!(dictionaries.stop.contains("smith"));
        assert!(!dictionaries.stop.contains("ignored"));
    }

    #[test]
    fn test_missing_list_is_fatal() {
        let tmp = TempDir::new().unwrap();
        write_layout(tmp.path());
        fs::remove_file(tmp.path().join(MASTER_DICTIONARY_DIR).join("negative-words.txt")).unwrap();

        let result = Dictionaries::from_data_dir(tmp.path());
        assert!(matches!(result, Err(MensuraError::DictionaryNotFound(_))));
    }

    #[test]
    fn test_missing_stop_dir_is_fatal() {
        let tmp = TempDir::new().unwrap();
        write_layout(tmp.path());
        fs::remove_dir_all(tmp.path().join(STOP_WORDS_DIR)).unwrap();

        let result = Dictionaries::from_data_dir(tmp.path());
        assert!(matches!(result, Err(MensuraError::DictionaryNotFound(_))));
    }
}
