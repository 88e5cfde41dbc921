//! # Detail Formatting
//!
//! Turns the optional, nested parts of a [`Country`] into display strings
//! for the detail overlay. Absent data renders as an explicit marker
//! rather than leaking through as an empty or placeholder value.

use super::country::{Country, Idd};

pub const UNKNOWN: &str = "unknown";
pub const NONE: &str = "none";

/// Calling code: root followed by suffixes joined with ", ".
///
/// `+1` with `["201", "202"]` renders as `+1201, 202`.
pub fn calling_code(idd: &Idd) -> String {
    let root = idd.root.as_deref().unwrap_or("");
    let suffixes = idd
        .suffixes
        .as_deref()
        .map(|s| s.join(", "))
        .unwrap_or_default();

    let code = format!("{root}{suffixes}");
    if code.is_empty() {
        UNKNOWN.to_string()
    } else {
        code
    }
}

/// One `lang: official (common)` line per native name, sorted by language code.
pub fn native_names(country: &Country) -> Vec<String> {
    if country.name.native_name.is_empty() {
        return vec![NONE.to_string()];
    }
    country
        .name
        .native_name
        .iter()
        .map(|(lang, name)| {
            if name.common.is_empty() || name.common == name.official {
                format!("{lang}: {}", name.official)
            } else {
                format!("{lang}: {} ({})", name.official, name.common)
            }
        })
        .collect()
}

pub fn alt_spellings(country: &Country) -> String {
    if country.alt_spellings.is_empty() {
        NONE.to_string()
    } else {
        country.alt_spellings.join(", ")
    }
}

pub fn flag_url(country: &Country) -> &str {
    country.flags.png.as_deref().unwrap_or(UNKNOWN)
}

/// Text description of the flag, when the upstream has one.
pub fn flag_description(country: &Country) -> Option<&str> {
    country
        .flags
        .alt
        .as_deref()
        .map(str::trim)
        .filter(|alt| !alt.is_empty())
}

/// Regional-indicator flag for a two-letter code ("CZ" → 🇨🇿).
/// Returns `None` for anything that isn't exactly two ASCII letters.
pub fn flag_emoji(cca2: &str) -> Option<String> {
    const REGIONAL_A: u32 = 0x1F1E6;

    if cca2.len() != 2 || !cca2.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    cca2.chars()
        .map(|c| char::from_u32(REGIONAL_A + (c.to_ascii_uppercase() as u32 - 'A' as u32)))
        .collect()
}
