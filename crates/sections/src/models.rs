// ABOUTME: Data models for parsed document sections.
// ABOUTME: DocSection, DocImage, and BodyParagraph consumed directly by page templates.

use serde::{Deserialize, Serialize};

/// An image pulled out of a section so templates can place it themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocImage {
    pub src: String,
    /// Alt text from the source document, or a generated positional label.
    pub alt: String,
}

/// A sanitized inline-HTML fragment from the body of a section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyParagraph {
    pub id: String,
    /// Inline HTML containing only whitelisted formatting tags and safe anchors.
    pub html: String,
    /// True when the fragment came from a list item (affects bullet rendering).
    pub is_list_item: bool,
}

/// One horizontal-rule-delimited chunk of the source document.
///
/// Sections are produced in document order with positional slug ids.
/// `html` holds the cleaned markup after image removal, kept as a raw
/// rendering fallback for sections whose blocks could not be classified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocSection {
    pub id: String,
    pub html: String,
    pub images: Vec<DocImage>,
    pub eyebrow: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body_paragraphs: Vec<BodyParagraph>,
}

impl DocSection {
    /// Returns true if the section has nothing a template could render.
    pub fn is_empty(&self) -> bool {
        self.html.is_empty() && self.images.is_empty()
    }

    /// Returns true if the section carries at least one extracted image.
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}
