// ABOUTME: Heading classification policy for section blocks.
// ABOUTME: Gathers leading heading candidates, then assigns eyebrow/title/subtitle roles.

use crate::blocks::Block;

/// Heading classification never looks past this many leading blocks.
const MAX_CANDIDATES: usize = 3;

/// Heuristic candidates must fit a short display line.
const MAX_HEURISTIC_LEN: usize = 120;

/// Glyphs marking a block as list-like rather than heading material.
const BULLET_GLYPHS: &[char] = &['\u{2022}', '\u{25E6}', '\u{25AA}', '\u{2023}'];

/// The assigned heading roles for one section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionHeadings {
    pub eyebrow: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

/// Splits a section's blocks into heading roles and body blocks.
///
/// Candidate gathering: a leading block stays a candidate while fewer
/// than three have been accepted and it is either an explicit heading
/// tag, or (no explicit heading tag has been seen yet) short plain text
/// that does not open with a bullet glyph or digit. Once an explicit
/// heading tag appears, heuristic acceptance is over. The first block
/// that fails ends the phase; everything after it is body regardless of
/// shape. If no candidate was found, the first body block is promoted.
pub fn classify_blocks(blocks: Vec<Block>) -> (SectionHeadings, Vec<Block>) {
    let mut candidates: Vec<Block> = Vec::new();
    let mut body: Vec<Block> = Vec::new();
    let mut gathering = true;
    let mut saw_heading_tag = false;

    for block in blocks {
        if gathering && accepts_candidate(&block, candidates.len(), saw_heading_tag) {
            saw_heading_tag = saw_heading_tag || block.is_heading_tag();
            candidates.push(block);
        } else {
            gathering = false;
            body.push(block);
        }
    }

    if candidates.is_empty() && !body.is_empty() {
        candidates.push(body.remove(0));
    }

    (assign_roles(candidates), body)
}

fn accepts_candidate(block: &Block, accepted: usize, saw_heading_tag: bool) -> bool {
    if accepted >= MAX_CANDIDATES {
        return false;
    }
    if block.is_heading_tag() {
        return true;
    }
    if saw_heading_tag {
        // Heading detection locks to explicit tags once one appears.
        return false;
    }
    let text = block.text.trim();
    text.chars().count() <= MAX_HEURISTIC_LEN
        && !text.starts_with(BULLET_GLYPHS)
        && !text.starts_with(|c: char| c.is_ascii_digit())
}

fn assign_roles(candidates: Vec<Block>) -> SectionHeadings {
    let mut headings = SectionHeadings::default();
    if candidates.is_empty() {
        return headings;
    }

    let rest = if candidates.len() >= 2 && is_eyebrow(&candidates[0].text) {
        headings.eyebrow = Some(candidates[0].text.clone());
        headings.title = Some(candidates[1].text.clone());
        &candidates[2..]
    } else {
        headings.title = Some(candidates[0].text.clone());
        &candidates[1..]
    };

    if !rest.is_empty() {
        let joined = rest
            .iter()
            .map(|b| b.html.as_str())
            .collect::<Vec<_>>()
            .join("<br />");
        headings.subtitle = Some(joined);
    }

    headings
}

/// An eyebrow is a short all-caps label above the title.
/// Text with no alphabetic characters never qualifies.
fn is_eyebrow(text: &str) -> bool {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let trimmed = normalized.trim();
    if !trimmed.chars().any(|c| c.is_alphabetic()) {
        return false;
    }
    trimmed == trimmed.to_uppercase()
}
