pub mod analyzer;
pub mod article;
pub mod batch;
pub mod dictionary;
pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod formatters;
pub mod input;
pub mod metrics;
pub mod parse;
#[cfg(feature = "fetch")]
pub mod scrape;
pub mod store;
pub mod tokenize;

pub use analyzer::{Analyzer, PipelineConfig, PipelineConfigBuilder};
pub use article::{Article, ArticleRef};
pub use batch::{OutputTable, ReportRow, analyze_batch};
pub use dictionary::{Dictionaries, DictionaryPaths, WordSet};
pub use error::{MensuraError, Result};
pub use extract::{ExtractedArticle, extract_article};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_file, fetch_stdin, fetch_url};
pub use formatters::csv::convert_to_csv;
pub use formatters::json::metrics_to_json;
pub use formatters::{COLUMNS, CsvFormatter, JsonConfig, JsonFormatter, ReportFormat, convert_to_json};
pub use formatters::{write_csv, write_csv_file};
pub use input::{read_inputs, read_inputs_file};
pub use metrics::{EPSILON, MetricsRecord, compute_metrics, count_personal_pronouns, count_syllables, is_complex};
#[cfg(feature = "fetch")]
pub use scrape::{ScrapeSummary, scrape_all};
pub use store::{TextSource, TextStore};
pub use tokenize::{TokenStream, normalize, remove_stop_words, segment_sentences, tokenize_words};
