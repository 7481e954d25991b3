// ABOUTME: Core parsing library turning a Google Doc HTML export into page sections.
// ABOUTME: Provides wrapper scrubbing, hr splitting, image/block extraction, and heading classification.

pub mod blocks;
pub mod entities;
pub mod headings;
pub mod images;
pub mod inline;
pub mod models;
pub mod parser;
pub mod scrub;
pub mod text;

pub use blocks::{extract_blocks, Block};
pub use entities::decode_entities;
pub use headings::{classify_blocks, SectionHeadings};
pub use images::{clean_section_html, extract_images};
pub use inline::sanitize_inline;
pub use models::{BodyParagraph, DocImage, DocSection};
pub use parser::parse_sections;
pub use scrub::{scrub_export, split_sections};
pub use text::{normalize_sentence_spacing, strip_tags};
