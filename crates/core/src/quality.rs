//! Article quality metrics.
//!
//! [`calculate_quality`] decides whether a block of text is substantial
//! enough to summarize. The thresholds are fixed policy.

use serde::Serialize;

use crate::scoring::{count_boilerplate, count_sentences, count_words};

/// Minimum characters for a text to be summarized.
pub const MIN_SUMMARY_CHARS: usize = 900;

/// Minimum sentence count for a text to be summarized.
pub const MIN_SUMMARY_SENTENCES: usize = 8;

/// Maximum boilerplate tokens per word for a text to be summarized.
pub const MAX_CTA_DENSITY: f64 = 0.02;

/// Objective metrics over a text block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleQuality {
    pub char_count: usize,
    pub sentence_count: usize,
    pub word_count: usize,
    pub cta_density: f64,
    pub ok_for_summary: bool,
}

/// Computes quality metrics for `text`.
///
/// `ok_for_summary` holds only when the text has at least
/// [`MIN_SUMMARY_CHARS`] characters, [`MIN_SUMMARY_SENTENCES`] sentences and
/// a CTA density of at most [`MAX_CTA_DENSITY`].
pub fn calculate_quality(text: &str) -> ArticleQuality {
    let char_count = text.chars().count();
    let sentence_count = count_sentences(text);
    let word_count = count_words(text);
    let cta_density = count_boilerplate(text) as f64 / word_count.max(1) as f64;

    let ok_for_summary =
        char_count >= MIN_SUMMARY_CHARS && sentence_count >= MIN_SUMMARY_SENTENCES && cta_density <= MAX_CTA_DENSITY;

    ArticleQuality { char_count, sentence_count, word_count, cta_density, ok_for_summary }
}
