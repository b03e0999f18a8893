//! Main scoring API.
//!
//! This module provides the primary entry point, the [`Analyzer`], which owns
//! the loaded dictionaries, together with the [`PipelineConfig`] describing
//! where inputs, texts and reports live.
//!
//! # Example
//!
//! ```rust
//! use mensura_core::{Analyzer, Dictionaries, WordSet};
//!
//! let analyzer = Analyzer::new(Dictionaries::new(
//!     WordSet::from_words(["gain"]),
//!     WordSet::from_words(["loss"]),
//!     WordSet::from_words(["the"]),
//! ));
//! let metrics = analyzer.analyze_text("The gain beat the loss.");
//! assert_eq!(metrics.polarity_score.round(), 0.0);
//! ```

use std::path::{Path, PathBuf};

use crate::article::ArticleRef;
use crate::batch::{OutputTable, analyze_batch};
use crate::dictionary::{Dictionaries, DictionaryPaths};
use crate::formatters::ReportFormat;
use crate::metrics::{MetricsRecord, compute_metrics};
use crate::store::{TextSource, TextStore};
use crate::{MensuraError, Result};

#[cfg(feature = "fetch")]
use crate::fetch::FetchConfig;

/// Locations and settings for a full scrape-and-score run.
///
/// # Example
///
/// ```rust
/// use mensura_core::PipelineConfig;
///
/// let config = PipelineConfig::builder()
///     .data_dir("fixtures/data")
///     .texts_dir("/tmp/texts")
///     .build()
///     .unwrap();
/// assert!(config.output.ends_with("output.csv"));
/// ```
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory holding `MasterDictionary/` and `StopWords/` (default: `data`).
    pub data_dir: PathBuf,

    /// Directory of scraped `{id}.txt` files (default: `output/texts`).
    pub texts_dir: PathBuf,

    /// Report destination (default: `output/output.csv`).
    pub output: PathBuf,

    /// Report format (default: CSV).
    pub format: ReportFormat,

    /// HTTP settings for the scrape stage.
    #[cfg(feature = "fetch")]
    pub fetch: FetchConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            texts_dir: PathBuf::from("output").join("texts"),
            output: PathBuf::from("output").join("output.csv"),
            format: ReportFormat::default(),
            #[cfg(feature = "fetch")]
            fetch: FetchConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Creates a new builder for PipelineConfig.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::new()
    }

    /// Word-list locations under [`data_dir`](Self::data_dir).
    pub fn dictionary_paths(&self) -> DictionaryPaths {
        DictionaryPaths::from_data_dir(&self.data_dir)
    }

    /// Store for scraped texts under [`texts_dir`](Self::texts_dir).
    pub fn text_store(&self) -> TextStore {
        TextStore::new(&self.texts_dir)
    }
}

/// Builder for PipelineConfig.
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: PipelineConfig::default() }
    }

    pub fn data_dir(mut self, value: impl Into<PathBuf>) -> Self {
        self.config.data_dir = value.into();
        self
    }

    pub fn texts_dir(mut self, value: impl Into<PathBuf>) -> Self {
        self.config.texts_dir = value.into();
        self
    }

    pub fn output(mut self, value: impl Into<PathBuf>) -> Self {
        self.config.output = value.into();
        self
    }

    pub fn format(mut self, value: ReportFormat) -> Self {
        self.config.format = value;
        self
    }

    /// Sets the HTTP settings used while scraping.
    #[cfg(feature = "fetch")]
    pub fn fetch(mut self, value: FetchConfig) -> Self {
        self.config.fetch = value;
        self
    }

    /// Builds the config.
    ///
    /// # Errors
    ///
    /// Returns [`MensuraError::ConfigError`] if a path is empty or the
    /// fetch timeout is zero.
    pub fn build(self) -> Result<PipelineConfig> {
        let config = self.config;
        let paths = [("data_dir", &config.data_dir), ("texts_dir", &config.texts_dir), ("output", &config.output)];
        for (name, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(MensuraError::ConfigError(format!("{} must not be empty", name)));
            }
        }
        #[cfg(feature = "fetch")]
        if config.fetch.timeout == 0 {
            return Err(MensuraError::ConfigError("timeout must be at least one second".to_string()));
        }
        Ok(config)
    }
}

impl Default for PipelineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Scores articles against a fixed set of dictionaries.
///
/// The analyzer is immutable after construction, so one instance can score
/// any number of articles, from any number of threads.
#[derive(Debug, Clone)]
pub struct Analyzer {
    dictionaries: Dictionaries,
}

impl Analyzer {
    pub fn new(dictionaries: Dictionaries) -> Self {
        Self { dictionaries }
    }

    /// Loads the dictionaries named by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`MensuraError::DictionaryNotFound`] if any word list is missing.
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        Ok(Self::new(Dictionaries::load(&config.dictionary_paths())?))
    }

    /// Loads the dictionaries from the standard layout under `data_dir`.
    pub fn from_data_dir(data_dir: &Path) -> Result<Self> {
        Ok(Self::new(Dictionaries::from_data_dir(data_dir)?))
    }

    pub fn dictionaries(&self) -> &Dictionaries {
        &self.dictionaries
    }

    /// Scores one article's raw text.
    pub fn analyze_text(&self, raw_text: &str) -> MetricsRecord {
        compute_metrics(raw_text, &self.dictionaries)
    }

    /// Scores an HTML page by extracting its title and body first.
    pub fn analyze_html(&self, html: &str) -> Result<MetricsRecord> {
        let article = crate::extract::extract_article(html)?;
        Ok(self.analyze_text(&article.raw_text()))
    }

    /// Scores every input whose text `source` can resolve, in input order.
    pub fn analyze_batch(&self, inputs: &[ArticleRef], source: &impl TextSource) -> OutputTable {
        analyze_batch(inputs, source, &self.dictionaries)
    }

    /// Fetches a page, extracts the article and scores it.
    #[cfg(feature = "fetch")]
    pub async fn fetch_and_analyze(&self, url: &str, fetch_config: &FetchConfig) -> Result<MetricsRecord> {
        let html = crate::fetch::fetch_url(url, fetch_config).await?;
        self.analyze_html(&html)
    }
}
