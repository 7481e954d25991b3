// ABOUTME: Inline HTML sanitizer producing fragments safe for direct template injection.
// ABOUTME: Allow-list DOM walk keeping a few formatting tags and rewriting anchors to safe links.

use scraper::{Html, Node};
use url::Url;

use crate::entities::decode_entities;

/// Formatting tags re-emitted without attributes.
const FORMAT_TAGS: &[&str] = &["strong", "b", "em", "i", "u", "sub", "sup", "code"];

/// URL schemes an anchor may carry.
const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Sanitizes a block's inner HTML down to whitelisted inline markup.
///
/// Line breaks are normalized to `<br />`. Wrapper tags (`span`, `font`,
/// `div`, `section`, `article`, `style`) are unwrapped, keeping their
/// contents. Anchors with a safe `href` are re-emitted with
/// `target="_blank" rel="noopener noreferrer"`; anchors with an unsafe
/// or missing `href` are unwrapped. Every other tag is stripped while
/// its text survives. Running the sanitizer on its own output is a
/// no-op.
pub fn sanitize_inline(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::new();
    for child in fragment.root_element().children() {
        write_inline(child, false, &mut out);
    }
    out.trim().to_string()
}

fn write_inline(node: ego_tree::NodeRef<Node>, inside_anchor: bool, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Element(el) => {
            let name = el.name().to_ascii_lowercase();
            match name.as_str() {
                "br" => out.push_str("<br />"),
                "a" if !inside_anchor => {
                    if let Some(href) = el.attr("href").and_then(safe_href) {
                        out.push_str("<a href=\"");
                        out.push_str(&escape_attr(&href));
                        out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
                        for child in node.children() {
                            write_inline(child, true, out);
                        }
                        out.push_str("</a>");
                    } else {
                        // Unsafe or missing href: keep the text, drop the link.
                        for child in node.children() {
                            write_inline(child, inside_anchor, out);
                        }
                    }
                }
                tag if FORMAT_TAGS.contains(&tag) => {
                    out.push('<');
                    out.push_str(tag);
                    out.push('>');
                    for child in node.children() {
                        write_inline(child, inside_anchor, out);
                    }
                    out.push_str("</");
                    out.push_str(tag);
                    out.push('>');
                }
                // Wrappers, nested anchors, and anything else off the
                // whitelist are unwrapped; inner text is never lost.
                _ => {
                    for child in node.children() {
                        write_inline(child, inside_anchor, out);
                    }
                }
            }
        }
        _ => {}
    }
}

/// Validates an href after entity-decoding and trimming.
/// Returns the decoded URL when its scheme is http, https, or mailto.
fn safe_href(raw: &str) -> Option<String> {
    let decoded = decode_entities(raw);
    let trimmed = decoded.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = Url::parse(trimmed).ok()?;
    if SAFE_SCHEMES.contains(&parsed.scheme()) {
        Some(trimmed.to_string())
    } else {
        None
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
