//! Batch scoring of many articles.

use crate::article::ArticleRef;
use crate::metrics::MetricsRecord;
use crate::store::TextSource;
use crate::Dictionaries;

/// One row of the report: the article identity and its metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub id: String,
    pub url: String,
    pub metrics: MetricsRecord,
}

/// Report rows in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputTable {
    rows: Vec<ReportRow>,
}

impl OutputTable {
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, row: ReportRow) {
        self.rows.push(row);
    }
}

impl FromIterator<ReportRow> for OutputTable {
    fn from_iter<I: IntoIterator<Item = ReportRow>>(iter: I) -> Self {
        Self { rows: iter.into_iter().collect() }
    }
}

/// Scores every input whose text `source` can resolve.
///
/// Articles without text are skipped with a warning and produce no row; the
/// remaining rows keep the input order.
pub fn analyze_batch(inputs: &[ArticleRef], source: &impl TextSource, dictionaries: &Dictionaries) -> OutputTable {
    let mut table = OutputTable::default();

    for input in inputs {
        let Some(article) = input.resolve(source) else {
            tracing::warn!(id = %input.id, url = %input.url, "missing scraped text, skipping");
            continue;
        };

        let metrics = article.metrics(dictionaries);
        tracing::debug!(id = %article.id, words = metrics.word_count, "article scored");
        table.push(ReportRow { id: article.id, url: article.url, metrics });
    }

    table
}
