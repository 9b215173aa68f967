//! Manipulative-language span detection.
//!
//! [`detect_spans`] scans text for manipulative and promotional phrases,
//! ALL-CAPS emphasis and runs of `!`/`?`, then merges everything into an
//! ascending list of non-overlapping [`Span`]s suitable for inline
//! highlighting.
//!
//! Offsets are UTF-8 byte offsets into the exact string that was scanned, so
//! spans must be recomputed whenever the displayed text changes.
//!
//! # Example
//!
//! ```rust
//! use calmread_core::{Reason, detect_spans};
//!
//! let text = "Breaking news: major announcement";
//! let spans = detect_spans(text);
//! assert_eq!(&text[spans[0].start..spans[0].end], "Breaking news");
//! assert!(spans[0].has_reason(Reason::ManipulativeLanguage));
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::lexicon::{self, MANIPULATIVE_PHRASES, PROMOTIONAL_PHRASES};

/// Why a span was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    ManipulativeLanguage,
    PromotionalContent,
    EmphaticCapitalization,
    ExcessivePunctuation,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::ManipulativeLanguage => "manipulative_language",
            Reason::PromotionalContent => "promotional_content",
            Reason::EmphaticCapitalization => "emphatic_capitalization",
            Reason::ExcessivePunctuation => "excessive_punctuation",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flagged region of text.
///
/// `end` is exclusive. `reasons` is never empty and keeps the order in which
/// contributing reasons were first seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub reasons: Vec<Reason>,
}

impl Span {
    pub fn new(start: usize, end: usize, text: impl Into<String>, reason: Reason) -> Self {
        Self { start, end, text: text.into(), reasons: vec![reason] }
    }

    /// The first contributing reason.
    pub fn reason(&self) -> Reason {
        self.reasons[0]
    }

    pub fn has_reason(&self, reason: Reason) -> bool {
        self.reasons.contains(&reason)
    }

    /// All reasons joined for display, e.g. `manipulative_language, emphatic_capitalization`.
    pub fn label(&self) -> String {
        self.reasons.iter().map(Reason::as_str).collect::<Vec<_>>().join(", ")
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extends this span to cover `other`, which must start at or before `self.end`.
    fn absorb(&mut self, source: &str, other: Span) {
        if other.end > self.end {
            self.end = other.end;
            self.text = source
                .get(self.start..self.end)
                .map(str::to_string)
                .unwrap_or_else(|| longer(&self.text, &other.text).to_string());
        }
        for reason in other.reasons {
            if !self.reasons.contains(&reason) {
                self.reasons.push(reason);
            }
        }
    }
}

fn longer<'a>(a: &'a str, b: &'a str) -> &'a str {
    if b.len() > a.len() { b } else { a }
}

static PHRASE_PATTERNS: LazyLock<Vec<(Regex, Reason)>> = LazyLock::new(|| {
    let manipulative = MANIPULATIVE_PHRASES
        .iter()
        .map(|phrase| (phrase_regex(phrase), Reason::ManipulativeLanguage));
    let promotional = PROMOTIONAL_PHRASES
        .iter()
        .map(|phrase| (phrase_regex(phrase), Reason::PromotionalContent));
    manipulative.chain(promotional).collect()
});

static CAPS_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]{4,}").unwrap());

static PUNCTUATION_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[!?]{2,}").unwrap());

/// Case-insensitive literal matcher that accepts straight or curly apostrophes.
fn phrase_regex(phrase: &str) -> Regex {
    let pattern = regex::escape(phrase).replace('\'', "['\u{2019}]");
    Regex::new(&format!("(?i){pattern}")).unwrap()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// True when the characters around `start..end` are non-word or string edges.
fn is_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

fn find_phrase(text: &str, pattern: &Regex, reason: Reason, out: &mut Vec<Span>) {
    let mut pos = 0;
    while let Some(m) = pattern.find_at(text, pos) {
        if is_bounded(text, m.start(), m.end()) {
            out.push(Span::new(m.start(), m.end(), m.as_str(), reason));
            pos = m.end();
        } else {
            let width = text[m.start()..].chars().next().map_or(1, char::len_utf8);
            pos = m.start() + width;
        }
        if pos >= text.len() {
            break;
        }
    }
}

fn find_capitals(text: &str, out: &mut Vec<Span>) {
    for m in CAPS_RUN.find_iter(text) {
        if is_bounded(text, m.start(), m.end()) && !lexicon::is_acronym(m.as_str()) {
            out.push(Span::new(m.start(), m.end(), m.as_str(), Reason::EmphaticCapitalization));
        }
    }
}

fn find_punctuation(text: &str, out: &mut Vec<Span>) {
    for m in PUNCTUATION_RUN.find_iter(text) {
        out.push(Span::new(m.start(), m.end(), m.as_str(), Reason::ExcessivePunctuation));
    }
}

/// Sorts raw matches and folds overlapping or touching ones together.
fn merge_spans(text: &str, mut raw: Vec<Span>) -> Vec<Span> {
    raw.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut merged: Vec<Span> = Vec::with_capacity(raw.len());
    for span in raw {
        match merged.last_mut() {
            Some(current) if span.start <= current.end => current.absorb(text, span),
            _ => merged.push(span),
        }
    }
    merged
}

/// Detects manipulative, promotional and emphatic spans in `text`.
///
/// The result is sorted by `start` and no two spans overlap.
pub fn detect_spans(text: &str) -> Vec<Span> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut raw = Vec::new();
    for (pattern, reason) in PHRASE_PATTERNS.iter() {
        find_phrase(text, pattern, *reason, &mut raw);
    }
    find_capitals(text, &mut raw);
    find_punctuation(text, &mut raw);

    merge_spans(text, raw)
}

/// [`detect_spans`] for optional input; `None` yields no spans.
pub fn detect_spans_opt(text: Option<&str>) -> Vec<Span> {
    text.map(detect_spans).unwrap_or_default()
}

/// Lower-cased, deduplicated texts of every detected span.
pub fn detected_phrases(text: &str) -> BTreeSet<String> {
    detect_spans(text).into_iter().map(|span| span.text.to_lowercase()).collect()
}

/// Whether any span is detected at all.
pub fn has_manipulative_language(text: &str) -> bool {
    !detect_spans(text).is_empty()
}

/// Wraps every span of `text` in `open`/`close` markers.
///
/// Spans that do not line up with `text` (out of range or not on a char
/// boundary) are skipped rather than misplaced.
pub fn highlight(text: &str, spans: &[Span], open: &str, close: &str) -> String {
    let mut output = String::with_capacity(text.len() + spans.len() * (open.len() + close.len()));
    let mut cursor = 0;

    for span in spans {
        if span.start < cursor {
            continue;
        }
        let (Some(gap), Some(marked)) = (text.get(cursor..span.start), text.get(span.start..span.end)) else {
            continue;
        };
        output.push_str(gap);
        output.push_str(open);
        output.push_str(marked);
        output.push_str(close);
        cursor = span.end;
    }

    output.push_str(&text[cursor..]);
    output
}
