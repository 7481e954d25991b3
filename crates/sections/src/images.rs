// ABOUTME: Image extraction and post-removal cleanup for section fragments.
// ABOUTME: Pulls img tags into DocImage records and strips empty leftovers from the markup.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Node, Selector};
use std::collections::HashSet;

use crate::entities::decode_entities;
use crate::models::DocImage;

static EMPTY_SPAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<span[^>]*>\s*</span>").unwrap());
static EMPTY_P_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<p[^>]*>(?:\s|&nbsp;)*</p>").unwrap());

/// Extracts inline images from a section fragment in document order and
/// returns them alongside the fragment HTML with every `<img>` removed.
///
/// `section_index` is the section's 1-based position, used for the
/// generated alt label. Images with an empty `src` are stripped from
/// the markup but not added to the result.
pub fn extract_images(html: &str, section_index: usize) -> (Vec<DocImage>, String) {
    let fragment = Html::parse_fragment(html);

    let mut images = Vec::new();
    let mut skip: HashSet<ego_tree::NodeId> = HashSet::new();

    let selector = Selector::parse("img").unwrap();
    for el in fragment.select(&selector) {
        skip.insert(el.id());

        let src = el
            .value()
            .attr("src")
            .map(|s| decode_entities(s).trim().to_string())
            .unwrap_or_default();
        if src.is_empty() {
            continue;
        }

        let alt = el
            .value()
            .attr("alt")
            .map(|a| decode_entities(a).trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| format!("Section visual {}-{}", section_index, images.len() + 1));

        images.push(DocImage { src, alt });
    }

    let mut remaining = String::new();
    for child in fragment.root_element().children() {
        serialize_skipping(child, &skip, &mut remaining);
    }

    (images, remaining)
}

/// Cleans a fragment after image removal.
///
/// Drops empty `<span>` pairs and paragraphs holding only whitespace or
/// no-break spaces, then turns remaining no-break spaces into plain
/// spaces so the block extractor never sees phantom paragraphs.
pub fn clean_section_html(html: &str) -> String {
    let mut cleaned = html.to_string();

    // Collapsing one empty span can expose another around it.
    loop {
        let next = EMPTY_SPAN_RE.replace_all(&cleaned, "").to_string();
        if next == cleaned {
            break;
        }
        cleaned = next;
    }

    let cleaned = EMPTY_P_RE.replace_all(&cleaned, "");
    cleaned
        .replace("&nbsp;", " ")
        .replace('\u{a0}', " ")
        .trim()
        .to_string()
}

/// Serializes a node tree, leaving out nodes in the skip set.
/// Attributes are kept as-is; this output is the section's raw fallback markup.
fn serialize_skipping(
    node: ego_tree::NodeRef<Node>,
    skip: &HashSet<ego_tree::NodeId>,
    out: &mut String,
) {
    if skip.contains(&node.id()) {
        return;
    }
    match node.value() {
        Node::Text(t) => out.push_str(&escape_text(t)),
        Node::Element(el) => {
            let name = el.name();
            out.push('<');
            out.push_str(name);
            for (k, v) in el.attrs() {
                out.push(' ');
                out.push_str(k);
                out.push_str("=\"");
                out.push_str(&escape_attr(v));
                out.push('"');
            }
            if is_void_element(name) {
                out.push_str(" />");
                return;
            }
            out.push('>');
            for child in node.children() {
                serialize_skipping(child, skip, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        _ => {}
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

fn is_void_element(tag: &str) -> bool {
    matches!(
        tag.to_lowercase().as_str(),
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
