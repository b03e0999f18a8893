//! Report writers for scored articles.
//!
//! Both formats share the column names of [`COLUMNS`], so a CSV header row
//! and a JSON object key set are interchangeable.

pub mod csv;
pub mod json;

use std::str::FromStr;

use serde::Serialize;

use crate::batch::ReportRow;
use crate::{MensuraError, Result};

pub use self::csv::{CsvFormatter, write_csv, write_csv_file};
pub use self::json::{JsonConfig, JsonFormatter, convert_to_json};

/// Report column headers, in output order.
pub const COLUMNS: [&str; 15] = [
    "URL_ID",
    "URL",
    "POSITIVE SCORE",
    "NEGATIVE SCORE",
    "POLARITY SCORE",
    "SUBJECTIVITY SCORE",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "WORD COUNT",
    "SYLLABLE PER WORD",
    "PERSONAL PRONOUNS",
    "AVG WORD LENGTH",
];

/// Output format for the metrics report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for ReportFormat {
    type Err = MensuraError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(MensuraError::ConfigError(format!(
                "Invalid format: {}. Valid options: csv, json",
                s
            ))),
        }
    }
}

/// Flat, serializable view of a [`ReportRow`] keyed by [`COLUMNS`].
#[derive(Debug, Serialize)]
pub(crate) struct ReportRecord<'a> {
    #[serde(rename = "URL_ID")]
    url_id: &'a str,
    #[serde(rename = "URL")]
    url: &'a str,
    #[serde(rename = "POSITIVE SCORE")]
    positive_score: usize,
    #[serde(rename = "NEGATIVE SCORE")]
    negative_score: usize,
    #[serde(rename = "POLARITY SCORE")]
    polarity_score: f64,
    #[serde(rename = "SUBJECTIVITY SCORE")]
    subjectivity_score: f64,
    #[serde(rename = "AVG SENTENCE LENGTH")]
    avg_sentence_length: f64,
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pct_complex_words: f64,
    #[serde(rename = "FOG INDEX")]
    fog_index: f64,
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    avg_words_per_sentence: f64,
    #[serde(rename = "COMPLEX WORD COUNT")]
    complex_word_count: usize,
    #[serde(rename = "WORD COUNT")]
    word_count: usize,
    #[serde(rename = "SYLLABLE PER WORD")]
    syllable_per_word: f64,
    #[serde(rename = "PERSONAL PRONOUNS")]
    personal_pronouns: usize,
    #[serde(rename = "AVG WORD LENGTH")]
    avg_word_length: f64,
}

impl<'a> From<&'a ReportRow> for ReportRecord<'a> {
    fn from(row: &'a ReportRow) -> Self {
        let m = &row.metrics;
        Self {
            url_id: &row.id,
            url: &row.url,
            positive_score: m.positive_score,
            negative_score: m.negative_score,
            polarity_score: m.polarity_score,
            subjectivity_score: m.subjectivity_score,
            avg_sentence_length: m.avg_sentence_length,
            pct_complex_words: m.pct_complex_words,
            fog_index: m.fog_index,
            avg_words_per_sentence: m.avg_words_per_sentence,
            complex_word_count: m.complex_word_count,
            word_count: m.word_count,
            syllable_per_word: m.syllable_per_word,
            personal_pronouns: m.personal_pronouns,
            avg_word_length: m.avg_word_length,
        }
    }
}
