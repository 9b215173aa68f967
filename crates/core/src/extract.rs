//! Main readable-content extraction.
//!
//! The extractor tries several structural strategies, turns each hit into a
//! plain-text [`ExtractionCandidate`], scores it, and keeps the best one.

use serde::Serialize;
use tracing::debug;

use crate::parse::Document;
use crate::preprocess::{PreprocessConfig, html_to_text};
use crate::scoring::{ScoreConfig, calculate_score};

/// Where a candidate came from, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "class")]
pub enum CandidateSource {
    /// Content of an `<article>` element
    Article,
    /// Content of a `<main>` element
    Main,
    /// An element whose class contains a known CMS body marker
    Container(&'static str),
    /// All sufficiently long `<p>` elements joined together
    Paragraphs,
}

impl CandidateSource {
    /// Static bonus added to the candidate's text score
    pub fn bonus(&self) -> f64 {
        match self {
            CandidateSource::Article => ARTICLE_BONUS,
            CandidateSource::Main => MAIN_BONUS,
            CandidateSource::Container(class) => CONTAINER_CLASSES
                .iter()
                .find(|(name, _)| name == class)
                .map_or(0.0, |(_, bonus)| *bonus),
            CandidateSource::Paragraphs => 0.0,
        }
    }
}

const ARTICLE_BONUS: f64 = 30.0;
const MAIN_BONUS: f64 = 25.0;

/// CMS body containers matched by class substring, with their bonus.
/// Ordered by priority; the generic `content` marker comes last.
const CONTAINER_CLASSES: &[(&str, f64)] = &[
    ("article-body", 20.0),
    ("articleBody", 20.0),
    ("story-body", 20.0),
    ("entry-content", 18.0),
    ("post-content", 16.0),
    ("article-content", 16.0),
    ("story-content", 15.0),
    ("post-body", 15.0),
    ("article-text", 15.0),
    ("body-text", 12.0),
    ("main-content", 10.0),
    ("content", 5.0),
];

/// Configuration for content extraction
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Paragraphs must be longer than this to join the fallback candidate
    pub min_paragraph_chars: usize,
    /// Scoring configuration
    pub score: ScoreConfig,
    /// HTML-to-text configuration
    pub preprocess: PreprocessConfig,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { min_paragraph_chars: 40, score: ScoreConfig::default(), preprocess: PreprocessConfig::default() }
    }
}

/// A scored block of candidate text
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionCandidate {
    pub text: String,
    /// Text score plus the source bonus
    pub score: f64,
    pub source: CandidateSource,
}

/// Collect every non-empty candidate in strategy priority order
pub fn extract_candidates(html: &str, config: &ExtractConfig) -> Vec<ExtractionCandidate> {
    if html.trim().is_empty() {
        return Vec::new();
    }

    let doc = Document::parse_with_preprocessing(html, &config.preprocess);
    let mut candidates = Vec::new();

    let mut push = |text: String, source: CandidateSource| {
        if text.is_empty() {
            return;
        }
        let result = calculate_score(&text, &config.score);
        let score = result.final_score + source.bonus();
        debug!(?source, score, chars = result.metrics.char_count, "scored extraction candidate");
        candidates.push(ExtractionCandidate { text, score, source });
    };

    for element in doc.select("article").unwrap_or_default() {
        push(html_to_text(&element.inner_html(), &config.preprocess), CandidateSource::Article);
    }

    for element in doc.select("main").unwrap_or_default() {
        push(html_to_text(&element.inner_html(), &config.preprocess), CandidateSource::Main);
    }

    for &(class, _) in CONTAINER_CLASSES {
        let selector = format!(r#"[class*="{class}"]"#);
        for element in doc.select(&selector).unwrap_or_default() {
            push(html_to_text(&element.inner_html(), &config.preprocess), CandidateSource::Container(class));
        }
    }

    let paragraphs: Vec<String> = doc
        .select("p")
        .unwrap_or_default()
        .iter()
        .map(|p| html_to_text(&p.inner_html(), &config.preprocess))
        .filter(|text| text.chars().count() > config.min_paragraph_chars)
        .collect();
    push(paragraphs.join("\n\n"), CandidateSource::Paragraphs);

    candidates
}

/// Select the highest-scoring candidate; ties go to the earlier strategy
pub fn select_best(candidates: Vec<ExtractionCandidate>) -> Option<ExtractionCandidate> {
    candidates.into_iter().fold(None, |best, candidate| match best {
        Some(current) if current.score >= candidate.score => Some(current),
        _ => Some(candidate),
    })
}

/// Extract the main readable text from raw HTML with default settings.
///
/// Returns an empty string when nothing usable is found.
///
/// # Example
///
/// ```rust
/// use calmread_core::extract_main_text;
///
/// let html = "<nav>Home</nav><article><p>Tom &amp; Jerry&#39;s new show opens.</p></article>";
/// assert_eq!(extract_main_text(html), "Tom & Jerry's new show opens.");
/// ```
pub fn extract_main_text(html: &str) -> String {
    extract_main_text_with_config(html, &ExtractConfig::default())
}

/// Extract the main readable text with a custom configuration
pub fn extract_main_text_with_config(html: &str, config: &ExtractConfig) -> String {
    select_best(extract_candidates(html, config))
        .map(|candidate| candidate.text)
        .unwrap_or_default()
}

/// Extract the page title (`og:title`, `twitter:title`, `<title>`, then first `<h1>`)
pub fn extract_title(html: &str) -> Option<String> {
    if html.trim().is_empty() {
        return None;
    }
    Document::parse(html).extract_title()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAGRAPHS: &[&str] = &[
        "The transit authority said on Monday that ridership had recovered to ninety percent of its earlier \
         levels, according to figures released at the quarterly board meeting.",
        "Board members credited a new fare-capping scheme, which limits weekly spending for frequent riders, and \
         the reopening of two downtown stations that had been closed for repairs.",
        "Union representatives welcomed the figures but warned that staffing shortages on weekend shifts were \
         still causing delays on the northern lines, especially late at night.",
        "The authority plans to hire two hundred additional operators by the end of the year and expects to \
         publish a revised timetable for public comment in the spring.",
    ];

    fn article_body(paragraphs: usize) -> String {
        PARAGRAPHS.iter().take(paragraphs).map(|p| format!("<p>{p}</p>")).collect()
    }

    #[test]
    fn test_empty_html() {
        assert_eq!(extract_main_text(""), "");
        assert_eq!(extract_main_text("   \n "), "");
        assert!(extract_candidates("", &ExtractConfig::default()).is_empty());
    }

    #[test]
    fn test_no_usable_content() {
        assert_eq!(extract_main_text("<html><body><nav><a href='/'>Home</a></nav></body></html>"), "");
    }

    #[test]
    fn test_article_wins_over_noise() {
        let html = format!(
            r#"<html><head><style>p {{ color: red; }}</style></head><body>
                <nav><a href="/">Home</a> <a href="/world">World news today and every day</a></nav>
                <script>window.tracker = "should not appear";</script>
                <article><h1>Rail strike ends</h1>{}<p>Tom &amp; Jerry&#39;s caf&eacute; reopened.</p></article>
                <footer><p>Copyright notice for the publisher of this site and its partners</p></footer>
            </body></html>"#,
            article_body(4)
        );

        let text = extract_main_text(&html);
        assert!(text.starts_with("Rail strike ends"));
        assert!(text.contains("Tom & Jerry's caf\u{E9} reopened."));
        assert!(!text.contains("tracker"));
        assert!(!text.contains("color: red"));
        assert!(!text.contains("World news"));
        assert!(!text.contains("Copyright"));
    }

    #[test]
    fn test_main_used_without_article() {
        let html = format!("<body><div class='sidebar'>Trending links</div><main>{}</main></body>", article_body(3));
        let candidates = extract_candidates(&html, &ExtractConfig::default());
        let best = select_best(candidates).unwrap();
        assert_eq!(best.source, CandidateSource::Main);
    }

    #[test]
    fn test_container_class_matching() {
        let html = format!(r#"<body><div class="c-article-body__inner">{}</div></body>"#, article_body(3));
        let best = select_best(extract_candidates(&html, &ExtractConfig::default())).unwrap();
        assert_eq!(best.source, CandidateSource::Container("article-body"));
        assert!(best.text.contains("ridership"));
    }

    #[test]
    fn test_paragraph_fallback() {
        let html = format!("<body><div>{}<p>Too short.</p></div></body>", article_body(3));
        let best = select_best(extract_candidates(&html, &ExtractConfig::default())).unwrap();
        assert_eq!(best.source, CandidateSource::Paragraphs);
        assert!(!best.text.contains("Too short"));
        assert_eq!(best.text.split("\n\n").count(), 3);
    }

    #[test]
    fn test_tie_goes_to_earlier_strategy() {
        let html = format!("<body><main><article>{}</article></main></body>", article_body(3));
        let candidates = extract_candidates(&html, &ExtractConfig::default());
        let article = candidates.iter().find(|c| c.source == CandidateSource::Article).unwrap();
        let main = candidates.iter().find(|c| c.source == CandidateSource::Main).unwrap();
        assert_eq!(article.text, main.text);

        let best = select_best(candidates).unwrap();
        assert_eq!(best.source, CandidateSource::Article);
    }

    #[test]
    fn test_select_best_prefers_first_on_equal_score() {
        let candidates = vec![
            ExtractionCandidate { text: "a".into(), score: 5.0, source: CandidateSource::Main },
            ExtractionCandidate { text: "b".into(), score: 5.0, source: CandidateSource::Paragraphs },
            ExtractionCandidate { text: "c".into(), score: 4.0, source: CandidateSource::Article },
        ];
        assert_eq!(select_best(candidates).unwrap().text, "a");
        assert!(select_best(Vec::new()).is_none());
    }

    #[test]
    fn test_source_bonus_order() {
        assert!(CandidateSource::Article.bonus() > CandidateSource::Main.bonus());
        assert!(CandidateSource::Main.bonus() > CandidateSource::Container("article-body").bonus());
        assert!(CandidateSource::Container("content").bonus() > CandidateSource::Paragraphs.bonus());
        assert_eq!(CandidateSource::Container("unknown").bonus(), 0.0);
    }

    #[test]
    fn test_extract_title() {
        let html = "<html><head><title>Rail strike ends | Daily</title></head><body></body></html>";
        assert_eq!(extract_title(html), Some("Rail strike ends | Daily".to_string()));
        assert_eq!(extract_title(""), None);
    }
}
