//! HTML character reference decoding.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z][a-zA-Z0-9]{1,31});").unwrap());

fn named_entity(name: &str) -> Option<&'static str> {
    let decoded = match name {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" | "ensp" | "emsp" | "thinsp" => " ",
        "shy" | "zwj" | "zwnj" => "",
        "ndash" => "\u{2013}",
        "mdash" => "\u{2014}",
        "hellip" => "\u{2026}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "sbquo" => "\u{201A}",
        "ldquo" => "\u{201C}",
        "rdquo" => "\u{201D}",
        "bdquo" => "\u{201E}",
        "laquo" => "\u{AB}",
        "raquo" => "\u{BB}",
        "bull" => "\u{2022}",
        "middot" => "\u{B7}",
        "copy" => "\u{A9}",
        "reg" => "\u{AE}",
        "trade" => "\u{2122}",
        "deg" => "\u{B0}",
        "times" => "\u{D7}",
        "divide" => "\u{F7}",
        "euro" => "\u{20AC}",
        "pound" => "\u{A3}",
        "yen" => "\u{A5}",
        "cent" => "\u{A2}",
        "sect" => "\u{A7}",
        "para" => "\u{B6}",
        "frac12" => "\u{BD}",
        "frac14" => "\u{BC}",
        "frac34" => "\u{BE}",
        "aacute" => "\u{E1}",
        "agrave" => "\u{E0}",
        "acirc" => "\u{E2}",
        "auml" => "\u{E4}",
        "eacute" => "\u{E9}",
        "egrave" => "\u{E8}",
        "ecirc" => "\u{EA}",
        "iacute" => "\u{ED}",
        "oacute" => "\u{F3}",
        "ouml" => "\u{F6}",
        "uacute" => "\u{FA}",
        "uuml" => "\u{FC}",
        "ntilde" => "\u{F1}",
        "ccedil" => "\u{E7}",
        "szlig" => "\u{DF}",
        "Eacute" => "\u{C9}",
        "Ouml" => "\u{D6}",
        "Uuml" => "\u{DC}",
        "Auml" => "\u{C4}",
        _ => return None,
    };
    Some(decoded)
}

fn numeric_entity(reference: &str) -> Option<char> {
    let code = match reference.strip_prefix("#x").or_else(|| reference.strip_prefix("#X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => reference.strip_prefix('#')?.parse::<u32>().ok()?,
    };
    match code {
        0 => None,
        160 => Some(' '),
        _ => char::from_u32(code),
    }
}

/// Decodes named (`&amp;`), decimal (`&#39;`) and hex (`&#x27;`) references.
///
/// Unknown or invalid references are left untouched. Decoding is a single
/// pass, so `&amp;lt;` becomes `&lt;`.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    ENTITY
        .replace_all(text, |caps: &Captures| {
            let reference = &caps[1];
            if reference.starts_with('#') {
                numeric_entity(reference).map_or_else(|| caps[0].to_string(), String::from)
            } else {
                named_entity(reference).map_or_else(|| caps[0].to_string(), str::to_string)
            }
        })
        .into_owned()
}
