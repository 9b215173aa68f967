//! Reader mode: fetch, extract and cache readable articles.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use calmread_core::ReaderModeConfig;
//!
//! let config = ReaderModeConfig::builder()
//!     .ttl(Duration::from_secs(60 * 60))
//!     .min_fallback_chars(50)
//!     .build();
//! assert_eq!(config.min_extracted_chars, 600);
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, warn};

use crate::article::{ArticleOrigin, ReadableArticle};
use crate::cache::ArticleCache;
use crate::extract::{ExtractConfig, extract_main_text_with_config, extract_title};
use crate::fetch::HtmlFetcher;

#[cfg(feature = "fetch")]
use crate::Result;
#[cfg(feature = "fetch")]
use crate::fetch::{FetchConfig, HttpFetcher};

/// Configuration for [`ReaderMode`].
#[derive(Debug, Clone)]
pub struct ReaderModeConfig {
    /// How long a cached article is served (default: 6 hours).
    pub ttl: Duration,
    /// Upper bound on a single fetch (default: 12 seconds).
    pub fetch_timeout: Duration,
    /// Extracted text shorter than this is not accepted (default: 600).
    pub min_extracted_chars: usize,
    /// Fallback text shorter than this is not accepted (default: 100).
    pub min_fallback_chars: usize,
    /// Settings passed to the extractor.
    pub extract: ExtractConfig,
}

impl Default for ReaderModeConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(6 * 60 * 60),
            fetch_timeout: Duration::from_secs(12),
            min_extracted_chars: 600,
            min_fallback_chars: 100,
            extract: ExtractConfig::default(),
        }
    }
}

impl ReaderModeConfig {
    pub fn builder() -> ReaderModeConfigBuilder {
        ReaderModeConfigBuilder::new()
    }
}

/// Fluent builder for [`ReaderModeConfig`].
pub struct ReaderModeConfigBuilder {
    config: ReaderModeConfig,
}

impl ReaderModeConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ReaderModeConfig::default() }
    }

    pub fn ttl(mut self, value: Duration) -> Self {
        self.config.ttl = value;
        self
    }

    pub fn fetch_timeout(mut self, value: Duration) -> Self {
        self.config.fetch_timeout = value;
        self
    }

    pub fn min_extracted_chars(mut self, value: usize) -> Self {
        self.config.min_extracted_chars = value;
        self
    }

    pub fn min_fallback_chars(mut self, value: usize) -> Self {
        self.config.min_fallback_chars = value;
        self
    }

    pub fn extract(mut self, value: ExtractConfig) -> Self {
        self.config.extract = value;
        self
    }

    pub fn build(self) -> ReaderModeConfig {
        self.config
    }
}

impl Default for ReaderModeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches pages, extracts their main text and caches the result per URL.
///
/// One `ReaderMode` can be shared between tasks. The cache lock is only held
/// for lookups and inserts, never while a fetch is in flight, so concurrent
/// reads of the same uncached URL each fetch once.
pub struct ReaderMode<F> {
    fetcher: F,
    config: ReaderModeConfig,
    cache: Mutex<ArticleCache>,
}

#[cfg(feature = "fetch")]
impl ReaderMode<HttpFetcher> {
    /// Reader mode backed by a reqwest client honoring `config.fetch_timeout`.
    pub fn http(config: ReaderModeConfig, user_agent: Option<String>) -> Result<Self> {
        let mut fetch = FetchConfig { timeout: config.fetch_timeout.as_secs().max(1), ..FetchConfig::default() };
        if let Some(user_agent) = user_agent {
            fetch.user_agent = user_agent;
        }
        Ok(Self::with_config(HttpFetcher::new(fetch)?, config))
    }
}

impl<F: HtmlFetcher> ReaderMode<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_config(fetcher, ReaderModeConfig::default())
    }

    pub fn with_config(fetcher: F, config: ReaderModeConfig) -> Self {
        let cache = Mutex::new(ArticleCache::new(config.ttl));
        Self { fetcher, config, cache }
    }

    pub fn config(&self) -> &ReaderModeConfig {
        &self.config
    }

    fn cache(&self) -> MutexGuard<'_, ArticleCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a readable article for `url`.
    ///
    /// A cached article younger than the TTL is returned without fetching.
    /// Otherwise the page is fetched (bounded by `fetch_timeout`) and its main
    /// text extracted. When the fetch fails or the text is too short,
    /// `fallback` is used if it is long enough. Accepted articles are cached.
    /// Returns `None` when neither source yields usable text.
    pub async fn read(&self, url: &str, fallback: Option<&str>) -> Option<ReadableArticle> {
        let cached = self.cache().get(url);
        if let Some(article) = cached {
            debug!(url, "reader cache hit");
            return Some(article);
        }
        debug!(url, "reader cache miss");

        let mut title = None;
        if let Some(html) = self.fetch(url).await {
            let text = extract_main_text_with_config(&html, &self.config.extract);
            let chars = text.chars().count();
            title = extract_title(&html);

            if chars >= self.config.min_extracted_chars {
                let article = ReadableArticle::new(text, title, Some(url.to_string()), ArticleOrigin::Extracted);
                self.cache().insert(url, article.clone());
                return Some(article);
            }
            debug!(url, chars, min = self.config.min_extracted_chars, "extracted text too short");
        }

        let fallback = fallback.map(str::trim).filter(|text| text.chars().count() >= self.config.min_fallback_chars)?;
        debug!(url, chars = fallback.chars().count(), "using fallback text");
        let article = ReadableArticle::new(fallback.to_string(), title, Some(url.to_string()), ArticleOrigin::Fallback);
        self.cache().insert(url, article.clone());
        Some(article)
    }

    async fn fetch(&self, url: &str) -> Option<String> {
        match tokio::time::timeout(self.config.fetch_timeout, self.fetcher.fetch(url)).await {
            Ok(Ok(html)) => Some(html),
            Ok(Err(error)) => {
                warn!(url, %error, "fetch failed");
                None
            }
            Err(_) => {
                warn!(url, timeout_secs = self.config.fetch_timeout.as_secs(), "fetch timed out");
                None
            }
        }
    }

    /// Drops every cached article.
    pub fn clear_cache(&self) {
        self.cache().clear();
    }

    /// Number of cached entries, including expired ones not yet evicted.
    pub fn cached_len(&self) -> usize {
        self.cache().len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::{CalmreadError, Result};

    const URL: &str = "https://news.example.com/story";

    const PARAGRAPHS: &[&str] = &[
        "The regional rail operator said on Thursday that it would restore full weekday service on the coastal line \
         after a month of repairs to flood-damaged tracks.",
        "Engineers replaced about two kilometers of embankment and rebuilt a culvert that had collapsed during the \
         storms in early spring, according to the operator.",
        "Commuters had relied on replacement buses that added up to forty minutes to each journey, and local \
         businesses reported a drop in visitors over the period.",
        "The operator plans to monitor the repaired section with new sensors and will publish weekly reliability \
         figures until the end of the year.",
        "A spokesperson said ticket holders affected by the closure could apply for partial refunds through the \
         website or at staffed stations until the end of next month.",
    ];

    fn article_page() -> String {
        let body: String = PARAGRAPHS.iter().map(|p| format!("<p>{p}</p>")).collect();
        format!("<html><head><title>Coastal line reopens</title></head><body><article>{body}</article></body></html>")
    }

    fn fallback_text() -> String {
        "Service on the coastal line resumes after repairs to flood-damaged tracks, ending weeks of replacement \
         bus journeys for commuters."
            .to_string()
    }

    enum Reply {
        Html(String),
        Status(u16),
        Slow(Duration),
    }

    struct MockFetcher {
        reply: Reply,
        calls: Arc<AtomicUsize>,
    }

    impl MockFetcher {
        fn new(reply: Reply) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (Self { reply, calls: calls.clone() }, calls)
        }
    }

    #[async_trait]
    impl HtmlFetcher for MockFetcher {
        async fn fetch(&self, _url: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Reply::Html(html) => Ok(html.clone()),
                Reply::Status(status) => Err(CalmreadError::HttpStatus { status: *status }),
                Reply::Slow(delay) => {
                    tokio::time::sleep(*delay).await;
                    Ok(article_page())
                }
            }
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = ReaderModeConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(21_600));
        assert_eq!(config.fetch_timeout, Duration::from_secs(12));
        assert_eq!(config.min_extracted_chars, 600);
        assert_eq!(config.min_fallback_chars, 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reads_and_caches_extracted_article() {
        let (fetcher, calls) = MockFetcher::new(Reply::Html(article_page()));
        let reader = ReaderMode::new(fetcher);

        let article = reader.read(URL, None).await.unwrap();
        assert_eq!(article.origin, ArticleOrigin::Extracted);
        assert_eq!(article.title.as_deref(), Some("Coastal line reopens"));
        assert_eq!(article.source_url.as_deref(), Some(URL));
        assert!(article.text.chars().count() >= 600);

        tokio::time::advance(Duration::from_secs(5 * 60 * 60)).await;
        let again = reader.read(URL, None).await.unwrap();
        assert_eq!(again, article);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refetches_after_ttl() {
        let (fetcher, calls) = MockFetcher::new(Reply::Html(article_page()));
        let reader = ReaderMode::new(fetcher);

        reader.read(URL, None).await.unwrap();
        tokio::time::advance(Duration::from_secs(6 * 60 * 60 + 1)).await;
        reader.read(URL, None).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_error_uses_fallback() {
        let (fetcher, calls) = MockFetcher::new(Reply::Status(503));
        let reader = ReaderMode::new(fetcher);
        let fallback = fallback_text();
        assert!(fallback.chars().count() >= 100);

        let article = reader.read(URL, Some(&fallback)).await.unwrap();
        assert_eq!(article.origin, ArticleOrigin::Fallback);
        assert_eq!(article.text, fallback);
        assert!(article.title.is_none());

        reader.read(URL, Some(&fallback)).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_error_without_usable_fallback() {
        let (fetcher, _) = MockFetcher::new(Reply::Status(404));
        let reader = ReaderMode::new(fetcher);

        assert!(reader.read(URL, None).await.is_none());
        assert!(reader.read(URL, Some("Too short to use.")).await.is_none());
        assert_eq!(reader.cached_len(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_extraction_falls_back() {
        let html = "<html><head><title>Brief</title></head><body><article><p>Only a teaser paragraph that is not long \
                    enough to read on its own.</p></article></body></html>";
        let (fetcher, _) = MockFetcher::new(Reply::Html(html.to_string()));
        let reader = ReaderMode::new(fetcher);

        let article = reader.read(URL, Some(&fallback_text())).await.unwrap();
        assert_eq!(article.origin, ArticleOrigin::Fallback);
        assert_eq!(article.title.as_deref(), Some("Brief"));

        reader.clear_cache();
        assert!(reader.read(URL, None).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_uses_fallback() {
        let (fetcher, calls) = MockFetcher::new(Reply::Slow(Duration::from_secs(30)));
        let reader = ReaderMode::new(fetcher);

        let article = reader.read(URL, Some(&fallback_text())).await.unwrap();
        assert_eq!(article.origin, ArticleOrigin::Fallback);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_fetch_within_timeout_succeeds() {
        let (fetcher, _) = MockFetcher::new(Reply::Slow(Duration::from_secs(5)));
        let reader = ReaderMode::new(fetcher);

        let article = reader.read(URL, None).await.unwrap();
        assert_eq!(article.origin, ArticleOrigin::Extracted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shared_between_tasks() {
        let (fetcher, calls) = MockFetcher::new(Reply::Html(article_page()));
        let reader = Arc::new(ReaderMode::new(fetcher));
        reader.read(URL, None).await.unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let reader = reader.clone();
                tokio::spawn(async move { reader.read(URL, None).await })
            })
            .collect();
        for handle in handles {
            assert!(handle.await.unwrap().is_some());
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
