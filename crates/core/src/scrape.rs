//! Sequential scraping of article pages into a [`TextStore`].

use crate::article::ArticleRef;
use crate::extract::{ExtractedArticle, extract_article};
use crate::fetch::{FetchConfig, fetch_url_with_client};
use crate::store::TextStore;
use crate::Result;

/// Outcome counts of a scrape run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub scraped: usize,
    pub failed: usize,
    /// Rows with an empty id or URL.
    pub skipped: usize,
}

/// Fetches and extracts a single article page.
pub async fn scrape_article(client: &reqwest::Client, url: &str, config: &FetchConfig) -> Result<ExtractedArticle> {
    let html = fetch_url_with_client(client, url, config).await?;
    extract_article(&html)
}

/// Scrapes every input in order, saving each article's text to `store`.
///
/// A failed fetch or write is logged and counted; it never stops the run.
/// The configured delay is awaited between requests.
///
/// # Errors
///
/// Only fails if the HTTP client cannot be constructed.
pub async fn scrape_all(inputs: &[ArticleRef], store: &TextStore, config: &FetchConfig) -> Result<ScrapeSummary> {
    let client = config.client()?;
    let mut summary = ScrapeSummary::default();
    let mut first_request = true;

    for input in inputs {
        if input.is_blank() {
            summary.skipped += 1;
            continue;
        }

        if !first_request && !config.delay.is_zero() {
            tokio::time::sleep(config.delay).await;
        }
        first_request = false;

        let saved = scrape_article(&client, &input.url, config)
            .await
            .and_then(|article| store.save(&input.id, &article));

        match saved {
            Ok(path) => {
                summary.scraped += 1;
                tracing::info!(id = %input.id, path = %path.display(), "scraped");
            }
            Err(e) => {
                summary.failed += 1;
                tracing::error!(id = %input.id, url = %input.url, error = %e, "failed to scrape");
            }
        }
    }

    Ok(summary)
}
