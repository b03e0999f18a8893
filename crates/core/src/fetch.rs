//! Content fetching from URLs, files, and stdin.
//!
//! This module provides functions for retrieving article content from
//! HTTP/HTTPS URLs, local files, and standard input.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{MensuraError, Result};

/// HTTP client configuration for fetching article pages.
///
/// This struct controls timeout, user agent and politeness settings.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
    /// Pause between consecutive requests in a batch.
    pub delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 10,
            user_agent: "Mozilla/5.0 (compatible; Mensura/1.0; article metrics bot)".to_string(),
            delay: Duration::from_millis(1000),
        }
    }
}

impl FetchConfig {
    /// Builds an HTTP client honoring the configured timeout.
    pub fn client(&self) -> Result<Client> {
        Client::builder()
            .timeout(Duration::from_secs(self.timeout))
            .build()
            .map_err(MensuraError::HttpError)
    }
}

/// Validates that `url` is an absolute http(s) URL.
pub fn parse_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| MensuraError::InvalidUrl(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(MensuraError::InvalidUrl(format!(
            "unsupported scheme '{}' (expected http:// or https://)",
            scheme
        ))),
    }
}

/// Fetches HTML content from a URL with a fresh client.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let client = config.client()?;
    fetch_url_with_client(&client, url, config).await
}

/// Fetches HTML content from a URL, reusing `client`.
///
/// Follows redirects and fails with [`MensuraError::HttpStatus`] for
/// non-success responses.
pub async fn fetch_url_with_client(client: &Client, url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = parse_url(url)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                MensuraError::Timeout { timeout: config.timeout }
            } else {
                MensuraError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(MensuraError::HttpStatus { status: status.as_u16(), url: url.to_string() });
    }

    let content = response.text().await?;

    Ok(content)
}

/// Reads content from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(MensuraError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(MensuraError::from)
    }
}

/// Reads all of standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(MensuraError::from)?;

    Ok(buffer)
}
