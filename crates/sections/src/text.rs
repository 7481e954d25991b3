// ABOUTME: Plain-text helpers for block content.
// ABOUTME: Provides tag stripping and sentence-spacing normalization.

use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([.,!?;:])").unwrap());
static SPACE_AFTER_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"([(\[])\s+").unwrap());
static SPACE_BEFORE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([)\]])").unwrap());

/// Strips tags from an HTML fragment, returning the raw text between them.
/// Naive by design: removes angle-bracketed runs without parsing.
pub fn strip_tags(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Normalizes spacing in decoded block text.
///
/// Collapses whitespace runs to single spaces, removes stray space
/// before closing punctuation and just inside brackets, and trims.
pub fn normalize_sentence_spacing(s: &str) -> String {
    let collapsed = collapse_whitespace(s);
    let no_punct_gap = SPACE_BEFORE_PUNCT.replace_all(&collapsed, "$1");
    let no_open_gap = SPACE_AFTER_OPEN.replace_all(&no_punct_gap, "$1");
    let no_close_gap = SPACE_BEFORE_CLOSE.replace_all(&no_open_gap, "$1");
    no_close_gap.trim().to_string()
}

/// Collapses runs of whitespace (including no-break spaces) to single spaces.
fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last_was_space = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                result.push(' ');
                last_was_space = true;
            }
        } else {
            result.push(c);
            last_was_space = false;
        }
    }

    result
}
