// ABOUTME: Block extraction for cleaned section fragments.
// ABOUTME: Walks p/li/heading elements in document order, producing text plus sanitized inline HTML.

use scraper::{ElementRef, Html, Node};

use crate::entities::decode_entities;
use crate::inline::sanitize_inline;
use crate::text::{normalize_sentence_spacing, strip_tags};

/// Tags treated as content blocks.
const BLOCK_TAGS: &[&str] = &["p", "li", "h1", "h2", "h3", "h4", "h5", "h6"];

/// Heading tags within the block set.
const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// One extracted content block, before heading/body classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Plain text after tag stripping, entity decoding, and spacing normalization.
    pub text: String,
    /// Sanitized inline HTML for direct injection.
    pub html: String,
    pub is_list_item: bool,
    /// Lowercased source tag name (p, li, h1..h6).
    pub tag: String,
}

impl Block {
    /// True when the block came from an explicit heading tag.
    pub fn is_heading_tag(&self) -> bool {
        HEADING_TAGS.contains(&self.tag.as_str())
    }
}

/// Extracts content blocks from a cleaned section fragment in document order.
///
/// The walk stops descending once it hits a block tag, so a paragraph
/// nested inside a list item contributes to the list item's block
/// rather than producing a second one. Blocks whose normalized text is
/// empty are discarded.
pub fn extract_blocks(html: &str) -> Vec<Block> {
    let fragment = Html::parse_fragment(html);
    let mut blocks = Vec::new();
    for child in fragment.root_element().children() {
        collect_blocks(child, &mut blocks);
    }
    blocks
}

fn collect_blocks(node: ego_tree::NodeRef<Node>, out: &mut Vec<Block>) {
    if let Some(el) = ElementRef::wrap(node) {
        let tag = el.value().name().to_ascii_lowercase();
        if BLOCK_TAGS.contains(&tag.as_str()) {
            if let Some(block) = build_block(&el, tag) {
                out.push(block);
            }
            return;
        }
    }
    for child in node.children() {
        collect_blocks(child, out);
    }
}

fn build_block(el: &ElementRef, tag: String) -> Option<Block> {
    let html = sanitize_inline(&el.inner_html());
    let text = normalize_sentence_spacing(&decode_entities(&strip_tags(&html)));
    if text.is_empty() {
        return None;
    }
    Some(Block {
        text,
        html,
        is_list_item: tag == "li",
        tag,
    })
}
