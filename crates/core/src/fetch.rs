//! Content fetching from URLs, files, and stdin.
//!
//! The reader-mode orchestrator talks to the network only through the
//! [`HtmlFetcher`] trait, so tests can plug in an in-memory fetcher.
//! [`HttpFetcher`] is the reqwest-backed implementation.

use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;

#[cfg(feature = "fetch")]
use std::time::Duration;
#[cfg(feature = "fetch")]
use url::Url;

use crate::{CalmreadError, Result};

/// HTTP client configuration for fetching web pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Accept header sent with every request.
    pub accept: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 12,
            user_agent: "Mozilla/5.0 (compatible; CalmReader/1.0)".to_string(),
            accept: "text/html,application/xhtml+xml".to_string(),
        }
    }
}

/// Source of raw HTML for a URL.
#[async_trait]
pub trait HtmlFetcher: Send + Sync {
    /// Fetch the HTML body at `url`.
    ///
    /// # Errors
    ///
    /// Implementations return an error for transport failures and non-2xx
    /// responses.
    async fn fetch(&self, url: &str) -> Result<String>;
}

#[cfg(feature = "fetch")]
fn parse_http_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| CalmreadError::InvalidUrl(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(CalmreadError::InvalidUrl(format!("unsupported scheme '{other}'"))),
    }
}

/// Fetches HTML with a shared reqwest client.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

#[cfg(feature = "fetch")]
impl HttpFetcher {
    /// Build a fetcher with its own client.
    ///
    /// # Errors
    ///
    /// Returns [`CalmreadError::HttpError`] if the TLS backend fails to
    /// initialize.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

#[cfg(feature = "fetch")]
#[async_trait]
impl HtmlFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let parsed = parse_http_url(url)?;

        let response = self
            .client
            .get(parsed)
            .header(reqwest::header::ACCEPT, &self.config.accept)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() { CalmreadError::Timeout { timeout: self.config.timeout } } else { e.into() }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CalmreadError::HttpStatus { status: status.as_u16() });
        }

        Ok(response.text().await?)
    }
}

/// Fetches HTML content from a URL with a one-off client.
///
/// # Errors
///
/// Returns [`CalmreadError::InvalidUrl`] for anything but an absolute
/// http(s) URL, [`CalmreadError::HttpStatus`] for non-2xx responses and
/// [`CalmreadError::Timeout`] when the request exceeds `config.timeout`.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    HttpFetcher::new(config.clone())?.fetch(url).await
}

/// Reads HTML content from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(CalmreadError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(CalmreadError::from)
    }
}

/// Reads HTML content from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    Ok(buffer)
}
