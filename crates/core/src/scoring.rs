use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::BOILERPLATE_TOKENS;

/// Configuration for candidate text scoring
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    /// Characters per point for length scoring
    pub chars_per_point: usize,
    /// Maximum score from text length
    pub max_length_score: f64,
    /// Maximum score from sentence count (one point per sentence)
    pub max_sentence_score: f64,
    /// Minimum characters for a line to count as a paragraph
    pub paragraph_min_chars: usize,
    /// Points per paragraph-like line
    pub paragraph_weight: f64,
    /// Maximum score from paragraph structure
    pub max_paragraph_score: f64,
    /// Texts shorter than this are penalized
    pub short_text_chars: usize,
    /// Penalty for short texts
    pub short_text_penalty: f64,
    /// Minimum sentences per 1000 characters before the text looks like navigation
    pub min_sentence_density: f64,
    /// Penalty for low sentence density
    pub low_density_penalty: f64,
    /// CTA density above which the text is penalized
    pub max_cta_density: f64,
    /// Penalty per unit of CTA density above the limit
    pub cta_weight: f64,
    /// Penalty when a 3-word sequence repeats too often
    pub repetition_penalty: f64,
    /// A 3-gram seen more than this many times marks the text as spam
    pub max_trigram_repeats: usize,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            chars_per_point: 100,
            max_length_score: 30.0,
            max_sentence_score: 20.0,
            paragraph_min_chars: 80,
            paragraph_weight: 2.0,
            max_paragraph_score: 10.0,
            short_text_chars: 200,
            short_text_penalty: -20.0,
            min_sentence_density: 2.0,
            low_density_penalty: -15.0,
            max_cta_density: 0.02,
            cta_weight: -300.0,
            repetition_penalty: -25.0,
            max_trigram_repeats: 3,
        }
    }
}

/// Objective measurements of a block of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextMetrics {
    pub char_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub cta_count: usize,
    pub cta_density: f64,
    pub has_repetition: bool,
}

/// Result of scoring a text block
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub metrics: TextMetrics,
    /// Reward for length, capped
    pub length_score: f64,
    /// Reward for sentence count, capped
    pub sentence_score: f64,
    /// Reward for paragraph-like lines, capped
    pub structure_score: f64,
    /// Sum of all penalties (zero or negative)
    pub penalty: f64,
    /// Final calculated score
    pub final_score: f64,
}

static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+(?:\s|$)").unwrap());

static BOILERPLATE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = BOILERPLATE_TOKENS
        .iter()
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).unwrap()
});

/// Count sentence terminators (`[.!?]+` followed by whitespace or end of text)
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_END.find_iter(text).count()
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count word-boundary matches of boilerplate tokens
pub fn count_boilerplate(text: &str) -> usize {
    BOILERPLATE.find_iter(text).count()
}

/// Number of words covered by boilerplate token matches
pub fn boilerplate_coverage(text: &str) -> usize {
    BOILERPLATE.find_iter(text).map(|m| count_words(m.as_str())).sum()
}

/// Boilerplate occurrences per word
pub fn cta_density(text: &str) -> f64 {
    count_boilerplate(text) as f64 / count_words(text).max(1) as f64
}

/// Whether any 3-word sequence appears more than `max_repeats` times
///
/// Words are compared lower-cased with surrounding punctuation removed.
pub fn has_repeated_trigrams(text: &str, max_repeats: usize) -> bool {
    let words: Vec<String> = text
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|w| !w.is_empty())
        .collect();

    let mut counts: HashMap<&[String], usize> = HashMap::new();
    for trigram in words.windows(3) {
        let count = counts.entry(trigram).or_insert(0);
        *count += 1;
        if *count > max_repeats {
            return true;
        }
    }
    false
}

/// Measure a text block
pub fn text_metrics(text: &str, config: &ScoreConfig) -> TextMetrics {
    let word_count = count_words(text);
    let cta_count = count_boilerplate(text);

    TextMetrics {
        char_count: text.chars().count(),
        word_count,
        sentence_count: count_sentences(text),
        paragraph_count: text
            .lines()
            .filter(|line| line.trim().chars().count() >= config.paragraph_min_chars)
            .count(),
        cta_count,
        cta_density: cta_count as f64 / word_count.max(1) as f64,
        has_repetition: has_repeated_trigrams(text, config.max_trigram_repeats),
    }
}

/// Score a candidate text block
///
/// Rewards capped length, sentence count and paragraph structure. Penalizes
/// very short text, low sentence density, high CTA density and repeated
/// 3-word sequences.
pub fn calculate_score(text: &str, config: &ScoreConfig) -> ScoreResult {
    let metrics = text_metrics(text, config);

    let length_score = ((metrics.char_count / config.chars_per_point.max(1)) as f64).min(config.max_length_score);
    let sentence_score = (metrics.sentence_count as f64).min(config.max_sentence_score);
    let structure_score = (metrics.paragraph_count as f64 * config.paragraph_weight).min(config.max_paragraph_score);

    let mut penalty = 0.0;

    if metrics.char_count < config.short_text_chars {
        penalty += config.short_text_penalty;
    } else {
        let density = metrics.sentence_count as f64 * 1000.0 / metrics.char_count as f64;
        if density < config.min_sentence_density {
            penalty += config.low_density_penalty;
        }
    }

    if metrics.cta_density > config.max_cta_density {
        penalty += (metrics.cta_density - config.max_cta_density) * config.cta_weight;
    }

    if metrics.has_repetition {
        penalty += config.repetition_penalty;
    }

    let final_score = length_score + sentence_score + structure_score + penalty;

    ScoreResult { metrics, length_score, sentence_score, structure_score, penalty, final_score }
}
