//! The readable article produced by reader mode.

use serde::Serialize;

use crate::Result;
use crate::quality::{ArticleQuality, calculate_quality};

/// Where the text of a [`ReadableArticle`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleOrigin {
    /// Extracted from the fetched page.
    Extracted,
    /// Caller-supplied fallback text.
    Fallback,
}

/// Clean text of a page, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadableArticle {
    pub text: String,
    pub title: Option<String>,
    pub quality: ArticleQuality,
    pub source_url: Option<String>,
    pub origin: ArticleOrigin,
}

impl ReadableArticle {
    /// Creates an article and computes its quality metrics from `text`.
    pub fn new(text: String, title: Option<String>, source_url: Option<String>, origin: ArticleOrigin) -> Self {
        let quality = calculate_quality(&text);
        Self { text, title, quality, source_url, origin }
    }

    /// Serializes the article as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
