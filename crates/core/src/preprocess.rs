use std::sync::LazyLock;

use regex::Regex;

use crate::entities::decode_entities;
use crate::scoring::boilerplate_coverage;

/// Configuration for turning an HTML fragment into plain text
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// Whether to remove script tags
    pub remove_scripts: bool,
    /// Whether to remove style tags
    pub remove_styles: bool,
    /// Whether to remove noscript tags
    pub remove_noscript: bool,
    /// Whether to drop short boilerplate lines from the resulting text
    pub remove_boilerplate: bool,
    /// Lines at least this many characters long are never treated as boilerplate
    pub boilerplate_line_max_chars: usize,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            remove_scripts: true,
            remove_styles: true,
            remove_noscript: true,
            remove_boilerplate: true,
            boilerplate_line_max_chars: 80,
        }
    }
}

static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static BLOCK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)</?(?:p|div|br|hr|li|ul|ol|h[1-6]|section|article|main|aside|header|footer|blockquote|pre|figure|figcaption|table|tr|td|th|dl|dt|dd)\b[^>]*>",
    )
    .unwrap()
});

static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

/// Remove HTML cleanup noise before parsing: unwanted tags and comments
pub fn preprocess_html(html: &str, config: &PreprocessConfig) -> String {
    let processed = if config.remove_scripts || config.remove_styles || config.remove_noscript {
        remove_unwanted_tags(html, config)
    } else {
        html.to_string()
    };

    remove_comments(&processed)
}

/// Convert an HTML fragment into paragraph-separated plain text.
///
/// Block-level tags become paragraph breaks, other tags are dropped,
/// character references are decoded and whitespace is collapsed. Paragraphs
/// are separated by a blank line.
pub fn html_to_text(html: &str, config: &PreprocessConfig) -> String {
    let cleaned = preprocess_html(html, config);
    let flattened = WHITESPACE.replace_all(&cleaned, " ");
    let broken = BLOCK_TAG.replace_all(&flattened, "\n");
    let stripped = ANY_TAG.replace_all(&broken, "");
    let decoded = decode_entities(&stripped);
    let text = normalize_whitespace(&decoded);

    if config.remove_boilerplate { remove_boilerplate_lines(&text, config.boilerplate_line_max_chars) } else { text }
}

/// Remove script, style and noscript tags together with their content
fn remove_unwanted_tags(html: &str, config: &PreprocessConfig) -> String {
    let mut output = String::new();
    let mut rewriter = lol_html::HtmlRewriter::new(
        lol_html::Settings {
            element_content_handlers: vec![
                if config.remove_scripts {
                    Some(lol_html::element!("script", |el| {
                        el.remove();
                        Ok(())
                    }))
                } else {
                    None
                },
                if config.remove_styles {
                    Some(lol_html::element!("style", |el| {
                        el.remove();
                        Ok(())
                    }))
                } else {
                    None
                },
                if config.remove_noscript {
                    Some(lol_html::element!("noscript", |el| {
                        el.remove();
                        Ok(())
                    }))
                } else {
                    None
                },
            ]
            .into_iter()
            .flatten()
            .collect(),
            ..Default::default()
        },
        |c: &[u8]| {
            output.push_str(&String::from_utf8_lossy(c));
        },
    );

    if rewriter.write(html.as_bytes()).is_err() || rewriter.end().is_err() {
        return html.to_string();
    }

    output
}

/// Remove HTML comments from the document
fn remove_comments(html: &str) -> String {
    COMMENT.replace_all(html, "").into_owned()
}

/// Collapse whitespace inside each line and drop empty lines.
fn normalize_whitespace(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Drop short lines that are navigation, sharing or account boilerplate.
///
/// A line shorter than `max_chars` is dropped when it is itself a boilerplate
/// token, or when boilerplate tokens cover more than half of its words.
fn remove_boilerplate_lines(text: &str, max_chars: usize) -> String {
    text.split("\n\n")
        .filter(|line| !is_boilerplate_line(line, max_chars))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn is_boilerplate_line(line: &str, max_chars: usize) -> bool {
    if line.chars().count() >= max_chars {
        return false;
    }

    let words = line.split_whitespace().count();
    if words == 0 {
        return true;
    }

    let covered = boilerplate_coverage(line);
    covered * 2 > words
}
