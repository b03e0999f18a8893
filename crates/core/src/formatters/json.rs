use super::ReportRecord;
use crate::Result;
use crate::batch::OutputTable;
use crate::metrics::MetricsRecord;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// Convert a report to a JSON array of objects keyed by the report columns
pub fn convert_to_json(table: &OutputTable, config: &JsonConfig) -> Result<String> {
    let records: Vec<ReportRecord<'_>> = table.rows().iter().map(ReportRecord::from).collect();

    if config.pretty { Ok(serde_json::to_string_pretty(&records)?) } else { Ok(serde_json::to_string(&records)?) }
}

/// Convert a single metrics record to JSON (for the `score` command)
pub fn metrics_to_json(metrics: &MetricsRecord, pretty: bool) -> Result<String> {
    if pretty { Ok(serde_json::to_string_pretty(metrics)?) } else { Ok(serde_json::to_string(metrics)?) }
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, table: &OutputTable) -> Result<String> {
        convert_to_json(table, &self.config)
    }

    pub fn metrics(&self, metrics: &MetricsRecord) -> Result<String> {
        metrics_to_json(metrics, self.config.pretty)
    }
}
