//! Input table reading.
//!
//! The input is a CSV file whose header names a `URL_ID` and a `URL` column.
//! Other columns are ignored, and values are trimmed.

use std::io::Read;
use std::path::Path;

use ::csv::{ReaderBuilder, Trim};

use crate::article::ArticleRef;
use crate::{MensuraError, Result};

/// Reads article references from CSV data.
///
/// # Errors
///
/// Returns [`MensuraError::Csv`] when the header lacks `URL_ID` or `URL`,
/// or when a record is malformed.
pub fn read_inputs<R: Read>(reader: R) -> Result<Vec<ArticleRef>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).flexible(true).from_reader(reader);

    let mut inputs = Vec::new();
    for record in csv_reader.deserialize::<ArticleRef>() {
        let record = record?;
        inputs.push(ArticleRef::new(&record.id, &record.url));
    }
    Ok(inputs)
}

/// Reads article references from a CSV file.
pub fn read_inputs_file(path: &Path) -> Result<Vec<ArticleRef>> {
    if !path.exists() {
        return Err(MensuraError::FileNotFound(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)?;
    let inputs = read_inputs(file)?;
    tracing::info!(path = %path.display(), count = inputs.len(), "input table loaded");
    Ok(inputs)
}
