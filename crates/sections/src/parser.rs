// ABOUTME: Top-level pipeline assembling DocSection values from a raw HTML export.
// ABOUTME: scrub -> split -> per section: images, cleanup, blocks, heading classification.

use crate::blocks::extract_blocks;
use crate::headings::classify_blocks;
use crate::images::{clean_section_html, extract_images};
use crate::models::{BodyParagraph, DocSection};
use crate::scrub::{scrub_export, split_sections};

/// Parses a raw exported HTML document into ordered page sections.
///
/// Degrades rather than fails: unusable sections are dropped and an
/// unparseable document simply yields an empty vector. Callers render
/// a fallback when nothing comes back.
pub fn parse_sections(raw_html: &str) -> Vec<DocSection> {
    let scrubbed = scrub_export(raw_html);

    let mut sections = Vec::new();
    for fragment in split_sections(&scrubbed) {
        let position = sections.len() + 1;
        if let Some(section) = build_section(&fragment, position) {
            sections.push(section);
        }
    }
    sections
}

fn build_section(fragment: &str, position: usize) -> Option<DocSection> {
    let id = format!("section-{}", position);

    let (images, without_images) = extract_images(fragment, position);
    let html = clean_section_html(&without_images);

    // A section needs renderable markup or at least one image.
    if html.is_empty() && images.is_empty() {
        return None;
    }

    let blocks = extract_blocks(&html);
    let (headings, body) = classify_blocks(blocks);

    let body_paragraphs = body
        .into_iter()
        .enumerate()
        .map(|(i, block)| BodyParagraph {
            id: format!("{}-block-{}", id, i + 1),
            html: block.html,
            is_list_item: block.is_list_item,
        })
        .collect();

    Some(DocSection {
        id,
        html,
        images,
        eyebrow: headings.eyebrow,
        title: headings.title,
        subtitle: headings.subtitle,
        body_paragraphs,
    })
}
