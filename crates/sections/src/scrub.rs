// ABOUTME: Document-level scrubbing and section splitting for exported HTML.
// ABOUTME: Strips DOCTYPE/script/style/head wrappers and splits on horizontal rules.

use once_cell::sync::Lazy;
use regex::Regex;

static DOCTYPE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<!doctype[^>]*>").unwrap());
static SCRIPT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap());
static STYLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap());
static HEAD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<head[^>]*>.*?</head>").unwrap());
static WRAPPER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</?(?:html|body)[^>]*>").unwrap());
static HR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<hr[^>]*>").unwrap());

/// Strips export chrome from a raw HTML document.
///
/// Removes the DOCTYPE declaration, `<script>`/`<style>`/`<head>` blocks,
/// and bare `<html>`/`<body>` wrapper tags, then trims. Best effort:
/// markup the patterns miss passes through untouched.
pub fn scrub_export(html: &str) -> String {
    let no_doctype = DOCTYPE_RE.replace_all(html, "");
    let no_script = SCRIPT_RE.replace_all(&no_doctype, "");
    let no_style = STYLE_RE.replace_all(&no_script, "");
    let no_head = HEAD_RE.replace_all(&no_style, "");
    let no_wrapper = WRAPPER_RE.replace_all(&no_head, "");
    no_wrapper.trim().to_string()
}

/// Splits scrubbed HTML into raw section fragments on `<hr>` boundaries.
///
/// The rule tag match is case-insensitive and attribute-tolerant,
/// mirroring how document authors separate topics with rule breaks.
/// Fragments are trimmed and empty ones discarded. Input with no rules
/// yields at most one fragment.
pub fn split_sections(html: &str) -> Vec<String> {
    HR_RE
        .split(html)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}
