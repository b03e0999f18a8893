//! Article identities and their scraped text.
//!
//! An [`ArticleRef`] is one row of the input table. Once its text has been
//! resolved it becomes an [`Article`], which is scored exactly once.

use serde::{Deserialize, Serialize};

use crate::metrics::{MetricsRecord, compute_metrics};
use crate::store::TextSource;
use crate::Dictionaries;

/// One input row: an article id and the URL it was published at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRef {
    #[serde(rename = "URL_ID")]
    pub id: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl ArticleRef {
    /// Creates a reference with surrounding whitespace trimmed from both fields.
    pub fn new(id: impl AsRef<str>, url: impl AsRef<str>) -> Self {
        Self { id: id.as_ref().trim().to_string(), url: url.as_ref().trim().to_string() }
    }

    /// Rows with an empty id or URL cannot be scraped.
    pub fn is_blank(&self) -> bool {
        self.id.is_empty() || self.url.is_empty()
    }

    /// Looks up this article's text, returning `None` when it is missing.
    pub fn resolve(&self, source: &impl TextSource) -> Option<Article> {
        source
            .raw_text(&self.id)
            .map(|raw_text| Article { id: self.id.clone(), url: self.url.clone(), raw_text })
    }
}

/// An article whose raw text (title and body) is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub url: String,
    pub raw_text: String,
}

impl Article {
    /// Scores this article's text.
    pub fn metrics(&self, dictionaries: &Dictionaries) -> MetricsRecord {
        compute_metrics(&self.raw_text, dictionaries)
    }
}
