//! HTML parsing and element selection.
//!
//! This module provides the [`Document`] and [`Element`] types that the
//! extractor uses to locate structural candidates (`<article>`, `<main>`,
//! CMS body containers, paragraphs) with CSS selectors.
//!
//! # Example
//!
//! ```rust
//! use calmread_core::parse::Document;
//!
//! let html = r#"<html><head><title>Test</title></head><body><p class="lead">Hello</p></body></html>"#;
//! let doc = Document::parse(html);
//! assert_eq!(doc.title(), Some("Test".to_string()));
//! assert_eq!(doc.select("p.lead").unwrap().len(), 1);
//! ```

use scraper::{Html, Selector};

use crate::preprocess::{self, PreprocessConfig};
use crate::{CalmreadError, Result};

/// Represents a parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string without preprocessing.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Parses HTML after removing scripts, styles, noscript blocks and comments.
    pub fn parse_with_preprocessing(html: &str, config: &PreprocessConfig) -> Self {
        let cleaned = preprocess::preprocess_html(html, config);
        Self { html: Html::parse_document(&cleaned) }
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`CalmreadError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| CalmreadError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Gets the content of the `<title>` element, whitespace-collapsed.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| collapse(&el.text().collect::<String>()))
            .filter(|title| !title.is_empty())
    }

    /// Extract the article title with priority fallback:
    /// 1. Open Graph `og:title`
    /// 2. Twitter `twitter:title`
    /// 3. `<title>` element
    /// 4. First `<h1>` element
    pub fn extract_title(&self) -> Option<String> {
        self.meta_content("og:title")
            .or_else(|| self.meta_content("twitter:title"))
            .or_else(|| self.title())
            .or_else(|| {
                self.select("h1")
                    .ok()?
                    .first()
                    .map(|h1| collapse(&h1.text()))
                    .filter(|text| !text.is_empty())
            })
    }

    fn meta_content(&self, name: &str) -> Option<String> {
        let selector = format!(r#"meta[property="{name}"], meta[name="{name}"]"#);
        self.select(&selector)
            .ok()?
            .iter()
            .filter_map(|meta| meta.attr("content"))
            .map(collapse)
            .find(|content| !content.is_empty())
    }

    /// Gets all text content from the document.
    pub fn text_content(&self) -> String {
        self.html.root_element().text().collect()
    }
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A wrapper around scraper's ElementRef.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the inner HTML of this element.
    pub fn inner_html(&self) -> String {
        self.element.inner_html()
    }

    /// Gets the text content of this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Gets the lowercase tag name of this element.
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <title>  Test
                Page </title>
            <script>var tracking = true;</script>
        </head>
        <body>
            <h1>Heading</h1>
            <p class="content">Paragraph 1</p>
            <p class="content">Paragraph 2</p>
            <a href="https://example.com">Link</a>
        </body>
        </html>
    "#;

    #[test]
    fn test_parse_document() {
        let doc = Document::parse(SAMPLE_HTML);
        assert_eq!(doc.title(), Some("Test Page".to_string()));
    }

    #[test]
    fn test_select_elements() {
        let doc = Document::parse(SAMPLE_HTML);
        let elements = doc.select("p.content").unwrap();

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].text(), "Paragraph 1");
        assert_eq!(elements[1].tag_name(), "p");
    }

    #[test]
    fn test_element_attributes() {
        let doc = Document::parse(SAMPLE_HTML);
        let elements = doc.select("a").unwrap();
        assert_eq!(elements[0].attr("href"), Some("https://example.com"));
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Document::parse(SAMPLE_HTML);
        assert!(matches!(doc.select("[[invalid"), Err(CalmreadError::HtmlParseError(_))));
    }

    #[test]
    fn test_preprocessing_removes_scripts() {
        let doc = Document::parse_with_preprocessing(SAMPLE_HTML, &PreprocessConfig::default());
        assert!(!doc.text_content().contains("tracking"));
        assert!(Document::parse(SAMPLE_HTML).text_content().contains("tracking"));
    }

    #[test]
    fn test_extract_title_prefers_open_graph() {
        let html = r#"<html><head>
            <meta property="og:title" content="OG Title">
            <title>Page Title</title>
        </head><body><h1>Heading</h1></body></html>"#;
        assert_eq!(Document::parse(html).extract_title(), Some("OG Title".to_string()));
    }

    #[test]
    fn test_extract_title_falls_back_to_h1() {
        let html = "<html><body><h1> Only   Heading </h1></body></html>";
        assert_eq!(Document::parse(html).extract_title(), Some("Only Heading".to_string()));
    }

    #[test]
    fn test_extract_title_missing() {
        assert_eq!(Document::parse("<p>No title</p>").extract_title(), None);
    }
}
