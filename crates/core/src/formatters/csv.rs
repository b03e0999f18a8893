use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use ::csv::WriterBuilder;

use super::{COLUMNS, ReportRecord};
use crate::batch::OutputTable;
use crate::{MensuraError, Result};

/// Writes the report as CSV with a header row, even when the table is empty.
pub fn write_csv<W: Write>(table: &OutputTable, writer: W) -> Result<W> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer.write_record(COLUMNS)?;
    for row in table.rows() {
        csv_writer.serialize(ReportRecord::from(row))?;
    }

    csv_writer.flush()?;
    csv_writer
        .into_inner()
        .map_err(|e| MensuraError::Io(e.into_error()))
}

/// Writes the report to `path`, creating parent directories as needed.
pub fn write_csv_file(table: &OutputTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_csv(table, file)?;
    Ok(())
}

/// Renders the report as a CSV string.
pub fn convert_to_csv(table: &OutputTable) -> Result<String> {
    let bytes = write_csv(table, Vec::new())?;
    String::from_utf8(bytes).map_err(|e| MensuraError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// CSV formatter for metrics reports
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, table: &OutputTable) -> Result<String> {
        convert_to_csv(table)
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}
