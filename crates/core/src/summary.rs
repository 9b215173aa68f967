//! Extractive calm summaries.
//!
//! [`make_calm_summary`] splits article text into sentences, scores each one
//! for how informative and calm it is, keeps the best in document order,
//! neutralizes them and groups them into short paragraphs.
//! [`make_fallback_summary`] builds a single paragraph from two short
//! descriptive fields when no article text is available.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::lexicon::ABBREVIATIONS;
use crate::neutralize::{count_filler, count_sensational, neutralize};

/// Input shorter than this is never summarized.
pub const MIN_INPUT_CHARS: usize = 300;
/// Sentence fragments shorter than this are discarded.
pub const MIN_SENTENCE_CHARS: usize = 25;
/// Fewest sentences a summary can be built from.
pub const MIN_SENTENCES: usize = 4;
/// Most sentences a summary keeps.
pub const MAX_SENTENCES: usize = 10;
/// Sentences scoring at or below this are never selected.
pub const SCORE_FLOOR: f64 = -5.0;
/// Shortest acceptable summary, in characters.
pub const MIN_SUMMARY_CHARS: usize = 200;
/// Fallback fields shorter than this after cleaning are skipped.
pub const MIN_FALLBACK_FIELD_CHARS: usize = 30;

/// Stand-in for periods inside abbreviations while splitting.
const PERIOD_PLACEHOLDER: char = '\u{E000}';

static ABBREVIATION_PATTERNS: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    ABBREVIATIONS
        .iter()
        .map(|abbr| {
            let pattern = Regex::new(&format!(r"\b{}", regex::escape(abbr))).unwrap();
            (pattern, abbr.replace('.', &PERIOD_PLACEHOLDER.to_string()))
        })
        .collect()
});

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[.!?]+["'\u{201D}\u{2019})\]]*\s+"#).unwrap());

static ATTRIBUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:said|says|told|according to|announced|reported|stated|confirmed|testified)\b").unwrap()
});

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday|january|february|march|april|may|june|july|august|september|october|november|december|yesterday|today|tonight|last (?:week|month|year)|this (?:week|month|year)|(?:19|20)\d{2})\b",
    )
    .unwrap()
});

static QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:[$\u{20AC}\u{A3}]\s?\d|\d[\d,.]*\s*(?:%|percent|per cent|million|billion|trillion|thousand|hundred|people|dollars|euros|pounds|km|miles|kilometers|tons|tonnes))").unwrap()
});

static INSTITUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:government|officials?|ministry|minister|court|police|president|parliament|congress|senate|council|agency|department|university|company|committee|commission|authority|spokesperson|spokesman|spokeswoman|mayor)\b",
    )
    .unwrap()
});

static LEADING_CONJUNCTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:But|And|So|Or)\b").unwrap());

fn protect_abbreviations(text: &str) -> String {
    let mut protected = text.to_string();
    for (pattern, replacement) in ABBREVIATION_PATTERNS.iter() {
        if pattern.is_match(&protected) {
            protected = pattern.replace_all(&protected, replacement.as_str()).into_owned();
        }
    }
    protected
}

fn restore_abbreviations(text: &str) -> String {
    text.replace(PERIOD_PLACEHOLDER, ".")
}

/// Split `text` into trimmed sentences.
///
/// A sentence ends at a run of `.`, `!` or `?` (optionally followed by
/// closing quotes or brackets) and whitespace. Periods inside known
/// abbreviations such as `Dr.` or `U.S.` do not end a sentence. Fragments
/// shorter than [`MIN_SENTENCE_CHARS`] are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let protected = protect_abbreviations(text);
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(&protected) {
        let end = m.start() + m.as_str().trim_end().len();
        sentences.push(&protected[start..end]);
        start = m.end();
    }
    sentences.push(&protected[start..]);

    sentences
        .into_iter()
        .map(|sentence| restore_abbreviations(sentence.trim()))
        .filter(|sentence| sentence.chars().count() >= MIN_SENTENCE_CHARS)
        .collect()
}

/// Score one sentence at position `index` of `total`.
///
/// Rewards moderate length, lead position, numbers, quotes, attribution,
/// dates, quantities and institutional references. Penalizes sensational
/// words, filler phrases, trailing questions and leading conjunctions.
pub fn score_sentence(sentence: &str, index: usize, total: usize) -> f64 {
    let mut score = 0.0;

    let chars = sentence.chars().count();
    score += match chars {
        50..=180 => 2.0,
        30..=49 | 181..=250 => 0.5,
        0..=29 => -1.0,
        _ => -2.0 - ((chars - 250) / 50) as f64 * 0.5,
    };

    if index == 0 {
        score += 3.0;
    } else if index <= 2 {
        score += 1.5;
    } else if index < total / 3 {
        score += 0.5;
    }
    if total > 4 && index + 2 >= total {
        score += 0.5;
    }

    if sentence.chars().any(|c| c.is_ascii_digit()) {
        score += 1.0;
    }
    if sentence.contains(['"', '\u{201C}', '\u{201D}']) {
        score += 1.0;
    }
    if ATTRIBUTION.is_match(sentence) {
        score += 1.5;
    }
    if DATE.is_match(sentence) {
        score += 1.0;
    }
    if QUANTITY.is_match(sentence) {
        score += 1.0;
    }
    if INSTITUTION.is_match(sentence) {
        score += 1.0;
    }

    score -= 2.0 * count_sensational(sentence) as f64;
    score -= 4.0 * count_filler(sentence) as f64;

    if sentence.trim_end().ends_with('?') {
        score -= 2.0;
    }
    if LEADING_CONJUNCTION.is_match(sentence) {
        score -= 1.5;
    }

    score
}

/// Group selected sentences into paragraphs.
///
/// Up to four sentences form one paragraph; five to seven form two with the
/// first taking the larger half; eight or more form three with the first two
/// taking a third each (rounded up) and the last taking the rest.
pub fn group_paragraphs(sentences: &[String]) -> Vec<String> {
    let n = sentences.len();
    let bounds: Vec<(usize, usize)> = match n {
        0 => return Vec::new(),
        1..=4 => vec![(0, n)],
        5..=7 => {
            let first = n.div_ceil(2);
            vec![(0, first), (first, n)]
        }
        _ => {
            let third = n.div_ceil(3);
            vec![(0, third), (third, 2 * third), (2 * third, n)]
        }
    };

    bounds
        .into_iter()
        .filter(|(start, end)| start < end)
        .map(|(start, end)| sentences[start..end].join(" "))
        .collect()
}

/// Build a neutral, extractive summary of `text`.
///
/// Returns an empty vector when the input is under [`MIN_INPUT_CHARS`], when
/// fewer than [`MIN_SENTENCES`] usable sentences survive scoring, or when the
/// result would be shorter than [`MIN_SUMMARY_CHARS`].
///
/// # Example
///
/// ```rust
/// use calmread_core::make_calm_summary;
///
/// assert!(make_calm_summary("Too short to summarize.").is_empty());
/// ```
pub fn make_calm_summary(text: &str) -> Vec<String> {
    if text.chars().count() < MIN_INPUT_CHARS {
        return Vec::new();
    }

    let sentences = split_sentences(text);
    let total = sentences.len();

    let mut scored: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| (index, score_sentence(sentence, index, total)))
        .filter(|(_, score)| *score > SCORE_FLOOR)
        .collect();

    if scored.len() < MIN_SENTENCES {
        debug!(sentences = total, usable = scored.len(), "too few usable sentences to summarize");
        return Vec::new();
    }

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(MAX_SENTENCES);
    scored.sort_by_key(|(index, _)| *index);

    let selected: Vec<String> = scored
        .iter()
        .map(|(index, _)| neutralize(&sentences[*index]))
        .filter(|sentence| !sentence.is_empty())
        .collect();

    let paragraphs = group_paragraphs(&selected);
    let length: usize = paragraphs.iter().map(|p| p.chars().count()).sum();
    if length < MIN_SUMMARY_CHARS {
        debug!(length, "summary too short");
        return Vec::new();
    }

    paragraphs
}

fn ensure_terminal_punctuation(mut text: String) -> String {
    if !text.ends_with(['.', '!', '?']) {
        text.push('.');
    }
    text
}

/// Build a one-paragraph summary from two short descriptive fields.
///
/// Each present field is neutralized; fields under
/// [`MIN_FALLBACK_FIELD_CHARS`] characters after cleaning, or containing a
/// filler phrase, are skipped. Returns an empty vector when nothing survives.
pub fn make_fallback_summary(what_happened: Option<&str>, why_it_matters: Option<&str>) -> Vec<String> {
    let parts: Vec<String> = [what_happened, why_it_matters]
        .into_iter()
        .flatten()
        .map(neutralize)
        .filter(|field| field.chars().count() >= MIN_FALLBACK_FIELD_CHARS && count_filler(field) == 0)
        .map(ensure_terminal_punctuation)
        .collect();

    if parts.is_empty() { Vec::new() } else { vec![parts.join(" ")] }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::sensational_words;

    const ARTICLE: &str = "The city council approved a new flood defense plan on Tuesday after a shocking vote that split members down the middle. \
        The plan includes 12 new pumping stations along the river and will cost about $40 million over five years. \
        \"We cannot wait for the next storm,\" said Mayor Linda Ortiz, who called the current situation a crisis for low-lying neighborhoods. \
        Opponents slammed the proposal, arguing that the money would be better spent on relocating the most exposed households. \
        Engineers from the state university said the pumping stations could reduce flooding in the worst-hit districts by 60 percent. \
        Construction is expected to begin in March 2025, pending approval from the regional environmental agency. \
        Residents at the meeting described years of water damage, rising insurance premiums and repeated evacuations. \
        The council will publish the full contract documents next week and hold two public hearings before work starts.";

    fn sentences(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_sentences() {
        let text = "Dr. Smith met officials in the U.S. capital on Monday. Was the meeting useful? \
                    \"It was productive,\" she said afterwards!! Short one.";
        assert_eq!(
            split_sentences(text),
            vec!["Dr. Smith met officials in the U.S. capital on Monday.", "\"It was productive,\" she said afterwards!!"]
        );
    }

    #[test]
    fn test_split_keeps_closing_quote() {
        let text = "The minister said \"the talks are over.\" Negotiators left the building at noon.";
        assert_eq!(
            split_sentences(text),
            vec!["The minister said \"the talks are over.\"", "Negotiators left the building at noon."]
        );
    }

    #[test]
    fn test_score_rewards_facts() {
        let factual = "The agency said on Monday that 40 percent of homes had power restored.";
        let vague = "Things seem to be moving along in some direction for many of the people.";
        assert!(score_sentence(factual, 5, 20) > score_sentence(vague, 5, 20));
    }

    #[test]
    fn test_score_penalties() {
        let calm = "The committee reviewed the proposal in a closed session.";
        let loud = "The committee reviewed the shocking proposal in a chaotic session.";
        let filler = "You won't believe what the committee reviewed in a closed session.";
        assert_eq!(score_sentence(calm, 5, 20) - score_sentence(loud, 5, 20), 4.0);
        assert_eq!(score_sentence(calm, 5, 20) - score_sentence(filler, 5, 20), 4.0);
        assert_eq!(
            score_sentence("But the committee reviewed the proposal in a closed session.", 5, 20),
            score_sentence("Yet the committee reviewed the proposal in a closed session.", 5, 20) - 1.5
        );
    }

    #[test]
    fn test_score_position() {
        let sentence = "The committee reviewed the proposal in a closed session.";
        assert!(score_sentence(sentence, 0, 20) > score_sentence(sentence, 1, 20));
        assert!(score_sentence(sentence, 1, 20) > score_sentence(sentence, 10, 20));
        assert!(score_sentence(sentence, 19, 20) > score_sentence(sentence, 10, 20));
    }

    #[test]
    fn test_group_paragraphs() {
        let make = |n: usize| (0..n).map(|i| format!("S{i}.")).collect::<Vec<_>>();
        assert!(group_paragraphs(&[]).is_empty());
        assert_eq!(group_paragraphs(&make(4)), vec!["S0. S1. S2. S3."]);
        assert_eq!(group_paragraphs(&make(5)), vec!["S0. S1. S2.", "S3. S4."]);
        assert_eq!(group_paragraphs(&make(7)), vec!["S0. S1. S2. S3.", "S4. S5. S6."]);
        assert_eq!(group_paragraphs(&make(8)), vec!["S0. S1. S2.", "S3. S4. S5.", "S6. S7."]);
        assert_eq!(group_paragraphs(&make(10)), vec!["S0. S1. S2. S3.", "S4. S5. S6. S7.", "S8. S9."]);
    }

    #[test]
    fn test_calm_summary() {
        let summary = make_calm_summary(ARTICLE);
        assert_eq!(summary.len(), 3);

        let joined = summary.join(" ");
        assert!(joined.starts_with("The city council approved"));
        assert!(joined.contains("notable vote"));
        assert!(joined.contains("Opponents criticized the proposal"));
        assert!(joined.contains("a situation for low-lying neighborhoods"));
        assert!(joined.chars().count() >= MIN_SUMMARY_CHARS);
    }

    #[test]
    fn test_summary_has_no_sensational_words() {
        let summary = make_calm_summary(ARTICLE).join(" ").to_lowercase();
        for word in sensational_words() {
            let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(word))).unwrap();
            assert!(!pattern.is_match(&summary), "{word} survived");
        }
    }

    #[test]
    fn test_summary_is_deterministic() {
        assert_eq!(make_calm_summary(ARTICLE), make_calm_summary(ARTICLE));
    }

    #[test]
    fn test_short_input_not_summarized() {
        assert!(make_calm_summary("").is_empty());
        assert!(make_calm_summary(&ARTICLE[..250]).is_empty());
    }

    #[test]
    fn test_too_few_sentences() {
        let text = format!("{} {}", "word ".repeat(70).trim_end(), "and that is all there is to say about it.");
        assert!(text.chars().count() >= MIN_INPUT_CHARS);
        assert!(make_calm_summary(&text).is_empty());
    }

    #[test]
    fn test_summary_too_short() {
        let mut text = String::from(
            "The bridge reopened on Monday. Crews repaired the deck joints. Traffic is flowing again now. \
             Tolls will stay the same too. ",
        );
        text.push_str(&"Yes. No. Maybe. Okay. ".repeat(12));
        assert!(text.chars().count() >= MIN_INPUT_CHARS);
        assert!(make_calm_summary(&text).is_empty());
    }

    #[test]
    fn test_fallback_summary() {
        let summary = make_fallback_summary(
            Some("Breaking: the council slammed the shocking budget plan"),
            Some("Local services could be cut by ten percent next year."),
        );
        assert_eq!(
            summary,
            sentences(&[
                "The council criticized the notable budget plan. Local services could be cut by ten percent next year."
            ])
        );
    }

    #[test]
    fn test_fallback_skips_short_and_filler_fields() {
        assert!(make_fallback_summary(None, None).is_empty());
        assert!(make_fallback_summary(Some("Too short."), Some("Here's why it matters to everyone reading")).is_empty());

        assert!(make_fallback_summary(Some("Breaking: stay tuned for the council decision on rents!!"), None).is_empty());

        let summary = make_fallback_summary(None, Some("The new rules apply to all rental homes from June."));
        assert_eq!(summary, sentences(&["The new rules apply to all rental homes from June."]));
    }

    #[test]
    fn test_fallback_keeps_words_that_contain_filler() {
        let field = "The wildfire spread onto farmland near the town overnight, officials said.";
        assert_eq!(make_fallback_summary(Some(field), None), sentences(&[field]));
    }
}
