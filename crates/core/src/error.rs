//! Error types for Mensura operations.
//!
//! This module defines the main error type [`MensuraError`] which represents
//! all possible errors that can occur while loading dictionaries, fetching
//! articles, and reading or writing tables.
//!
//! Scoring itself never fails: empty or malformed text produces an all-zero
//! [`MetricsRecord`](crate::MetricsRecord) rather than an error.
//!
//! # Example
//!
//! ```rust
//! use mensura_core::{MensuraError, Result};
//!
//! fn require_url(url: &str) -> Result<&str> {
//!     if url.is_empty() {
//!         return Err(MensuraError::InvalidUrl("empty".to_string()));
//!     }
//!     Ok(url)
//! }
//! # assert!(require_url("").is_err());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Mensura operations.
///
/// # Example
///
/// ```rust
/// use mensura_core::{Dictionaries, DictionaryPaths, MensuraError};
///
/// match Dictionaries::load(&DictionaryPaths::from_data_dir("/nonexistent")) {
///     Ok(_) => unreachable!(),
///     Err(MensuraError::DictionaryNotFound(path)) => println!("missing {}", path.display()),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum MensuraError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP {status} returned for {url}")]
    HttpStatus { status: u16, url: String },

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// File not found.
    ///
    /// Returned when attempting to read an input file that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// A sentiment or stop-word list could not be found.
    ///
    /// Scoring cannot proceed without every dictionary, so callers should
    /// treat this as fatal.
    #[error("Dictionary not found: {0}")]
    DictionaryNotFound(PathBuf),

    /// Standard I/O errors for file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input table or failed table write.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid pipeline configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

#[cfg(feature = "fetch")]
impl From<reqwest::Error> for MensuraError {
    fn from(err: reqwest::Error) -> Self {
        MensuraError::HttpError(err)
    }
}

/// Result type alias for MensuraError.
///
/// This is a convenience alias for `std::result::Result<T, MensuraError>`.
pub type Result<T> = std::result::Result<T, MensuraError>;
