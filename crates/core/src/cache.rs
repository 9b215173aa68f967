//! Time-bounded cache of readable articles keyed by URL.
//!
//! Entries are evicted lazily: an expired entry is removed when it is looked
//! up, never by a background task. Time comes from [`tokio::time::Instant`]
//! so tests can drive expiry with a paused clock.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::article::ReadableArticle;

#[derive(Debug, Clone)]
struct CacheEntry {
    article: ReadableArticle,
    stored_at: Instant,
}

/// URL-keyed article cache with a fixed time-to-live.
#[derive(Debug, Clone)]
pub struct ArticleCache {
    ttl: Duration,
    entries: HashMap<String, CacheEntry>,
}

impl ArticleCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entries: HashMap::new() }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the article for `url` if it was stored no longer than `ttl` ago.
    ///
    /// An expired entry is removed.
    pub fn get(&mut self, url: &str) -> Option<ReadableArticle> {
        let entry = self.entries.get(url)?;
        if entry.stored_at.elapsed() <= self.ttl {
            return Some(entry.article.clone());
        }
        self.entries.remove(url);
        None
    }

    /// Stores `article` under `url`, replacing any previous entry.
    pub fn insert(&mut self, url: impl Into<String>, article: ReadableArticle) {
        self.entries.insert(url.into(), CacheEntry { article, stored_at: Instant::now() });
    }

    pub fn remove(&mut self, url: &str) -> Option<ReadableArticle> {
        self.entries.remove(url).map(|entry| entry.article)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries, including expired ones not yet looked up.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
