pub mod article;
pub mod cache;
pub mod entities;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod lexicon;
pub mod neutralize;
pub mod parse;
pub mod preprocess;
pub mod quality;
pub mod reader;
pub mod scoring;
pub mod spans;
pub mod summary;

pub use article::{ArticleOrigin, ReadableArticle};
pub use cache::ArticleCache;
pub use entities::decode_entities;
pub use error::{CalmreadError, Result};
pub use extract::{
    CandidateSource, ExtractConfig, ExtractionCandidate, extract_candidates, extract_main_text,
    extract_main_text_with_config, extract_title, select_best,
};
#[cfg(feature = "fetch")]
pub use fetch::{HttpFetcher, fetch_url};
pub use fetch::{FetchConfig, HtmlFetcher, fetch_file, fetch_stdin};
pub use neutralize::{contains_filler, neutralize};
pub use parse::Document;
#[doc(hidden)]
pub use preprocess::PreprocessConfig;
pub use preprocess::{html_to_text, preprocess_html};
pub use quality::{ArticleQuality, calculate_quality};
pub use reader::{ReaderMode, ReaderModeConfig, ReaderModeConfigBuilder};
#[doc(hidden)]
pub use scoring::{ScoreConfig, ScoreResult, calculate_score};
pub use spans::{Reason, Span, detect_spans, detect_spans_opt, detected_phrases, has_manipulative_language, highlight};
pub use summary::{make_calm_summary, make_fallback_summary};
