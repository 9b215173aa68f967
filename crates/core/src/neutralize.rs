//! Calm rewording of sensational text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::lexicon::{FILLER_PHRASES, NEUTRAL_SUBSTITUTIONS, SENSATIONAL_PREFIXES};

static SUBSTITUTIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    NEUTRAL_SUBSTITUTIONS
        .iter()
        .map(|(word, replacement)| (word_regex(word), *replacement))
        .collect()
});

static SENSATIONAL: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = NEUTRAL_SUBSTITUTIONS
        .iter()
        .map(|(word, _)| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).unwrap()
});

static PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = SENSATIONAL_PREFIXES
        .iter()
        .map(|prefix| regex::escape(prefix))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"(?im)^[ \t]*(?:{alternation})(?:[ \t]*[:|][ \t]*|[ \t]+[\-\u{{2013}}\u{{2014}}][ \t]+)"
    ))
    .unwrap()
});

static FILLER: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = FILLER_PHRASES
        .iter()
        .map(|phrase| regex::escape(phrase).replace('\'', "['\u{2019}]"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).unwrap()
});

static EXCLAMATIONS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!{2,}").unwrap());
static QUESTIONS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\?{2,}").unwrap());
static ELLIPSES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{3,}").unwrap());
static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]{2,}").unwrap());

fn word_regex(word: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word))).unwrap()
}

/// Give `replacement` the casing of `original`: ALL CAPS, Capitalized, or as-is.
fn match_case(original: &str, replacement: &str) -> String {
    let letters: Vec<char> = original.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
        return replacement.to_uppercase();
    }
    if original.chars().next().is_some_and(char::is_uppercase) {
        return capitalize(replacement);
    }
    replacement.to_string()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Remove line-leading labels such as `Breaking:` or `Urgent -`.
pub fn strip_sensational_prefix(text: &str) -> String {
    let stripped = PREFIX.replace_all(text, "");
    if stripped.len() == text.len() {
        return text.to_string();
    }
    stripped.lines().map(capitalize).collect::<Vec<_>>().join("\n")
}

/// Rewrite sensational wording calmly.
///
/// Applies the fixed word substitutions (keeping the original casing),
/// removes sensational prefixes and collapses `!!+` to `.`, `??+` to `?` and
/// `...+` to `.`.
///
/// # Example
///
/// ```rust
/// use calmread_core::neutralize;
///
/// assert_eq!(neutralize("Breaking: Senator SLAMS shocking plan!!"), "Senator CRITICIZES notable plan.");
/// ```
pub fn neutralize(text: &str) -> String {
    let mut output = strip_sensational_prefix(text);

    for (pattern, replacement) in SUBSTITUTIONS.iter() {
        if pattern.is_match(&output) {
            output = pattern
                .replace_all(&output, |caps: &Captures| match_case(&caps[0], replacement))
                .into_owned();
        }
    }

    let output = EXCLAMATIONS.replace_all(&output, ".");
    let output = QUESTIONS.replace_all(&output, "?");
    let output = ELLIPSES.replace_all(&output, ".");
    let output = SPACES.replace_all(&output, " ");

    output.trim().to_string()
}

/// Number of sensational-word occurrences in `text`.
pub fn count_sensational(text: &str) -> usize {
    SENSATIONAL.find_iter(text).count()
}

/// Number of whole-word filler phrase occurrences in `text`.
pub fn count_filler(text: &str) -> usize {
    FILLER.find_iter(text).count()
}

/// Whether `text` contains any filler phrase.
pub fn contains_filler(text: &str) -> bool {
    count_filler(text) > 0
}
