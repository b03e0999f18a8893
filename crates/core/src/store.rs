//! Scraped-text storage and lookup.
//!
//! The scrape stage writes one `{id}.txt` file per article into a
//! [`TextStore`]; the analysis stage reads them back through the
//! [`TextSource`] trait, which in-memory maps also implement.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::extract::ExtractedArticle;

/// Resolves an article id to its raw text.
pub trait TextSource {
    /// Returns `None` when no text is available for `id`.
    fn raw_text(&self, id: &str) -> Option<String>;
}

impl TextSource for HashMap<String, String> {
    fn raw_text(&self, id: &str) -> Option<String> {
        self.get(id).cloned()
    }
}

/// A directory of `{id}.txt` files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStore {
    dir: PathBuf,
}

impl TextStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the text file for `id`.
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.txt", id))
    }

    /// Writes an article's raw text, creating the directory if needed.
    pub fn save(&self, id: &str, article: &ExtractedArticle) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(id);
        fs::write(&path, article.raw_text())?;
        Ok(path)
    }

    /// Reads the stored text for `id`, or `Ok(None)` if it was never saved.
    pub fn load(&self, id: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(id)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl TextSource for TextStore {
    fn raw_text(&self, id: &str) -> Option<String> {
        match self.load(id) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(id, error = %e, "failed to read stored text");
                None
            }
        }
    }
}
