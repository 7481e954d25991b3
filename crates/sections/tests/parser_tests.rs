// ABOUTME: Integration tests for the full export-to-sections pipeline.
// ABOUTME: Feeds realistic Google Docs export markup through parse_sections.

use docpage_sections::{parse_sections, sanitize_inline};
use pretty_assertions::assert_eq;

/// Markup in the shape the Docs HTML export actually produces: styled
/// body wrapper, class-heavy spans, nbsp padding, hr section breaks.
const EXPORT_FIXTURE: &str = concat!(
    r#"<html><head><meta content="text/html; charset=UTF-8" http-equiv="content-type">"#,
    r#"<style type="text/css">.c0{font-weight:400}.c1{font-weight:700}</style></head>"#,
    r#"<body class="c9 doc-content">"#,
    r#"<p class="c2"><span class="c1">INTRODUCTION</span></p>"#,
    r#"<p class="c2"><span class="c0">The Sacred Path</span></p>"#,
    r#"<p class="c2"><span class="c0">A journey inward, one page at a time</span></p>"#,
    r#"<p class="c2"><span class="c0">This opening section carries enough running copy that the"#,
    r#" classifier treats it as body rather than another heading line.</span></p>"#,
    r#"<hr>"#,
    r#"<p class="c2 c5"><span class="c0"></span></p>"#,
    r#"<p class="c2"><span class="c0"><img alt="" src="images/image1.png" "#,
    r#"style="width: 601px; height: 202px;"></span></p>"#,
    r#"<h2 class="c4"><span class="c0">What You Will Learn</span></h2>"#,
    r#"<ul class="c6"><li class="c3"><span class="c0">how to sit with stillness</span></li>"#,
    r#"<li class="c3"><span class="c0">how to read your own patterns</span></li></ul>"#,
    r#"<p class="c2"><span class="c0">Read more on "#,
    r#"<a class="c7" href="https://example.com/course">the course page</a>.</span></p>"#,
    r#"<hr>"#,
    r#"<p class="c2 c5"><span class="c0">&nbsp;</span></p>"#,
    r#"</body></html>"#
);

#[test]
fn parses_export_into_two_sections() {
    let sections = parse_sections(EXPORT_FIXTURE);
    // The trailing nbsp-only fragment is unusable and dropped.
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].id, "section-1");
    assert_eq!(sections[1].id, "section-2");
}

#[test]
fn first_section_gets_eyebrow_title_subtitle() {
    let sections = parse_sections(EXPORT_FIXTURE);
    let first = &sections[0];
    assert_eq!(first.eyebrow.as_deref(), Some("INTRODUCTION"));
    assert_eq!(first.title.as_deref(), Some("The Sacred Path"));
    assert_eq!(
        first.subtitle.as_deref(),
        Some("A journey inward, one page at a time")
    );
    assert_eq!(first.body_paragraphs.len(), 1);
    assert!(first.body_paragraphs[0]
        .html
        .starts_with("This opening section"));
}

#[test]
fn second_section_extracts_image_and_locks_to_heading() {
    let sections = parse_sections(EXPORT_FIXTURE);
    let second = &sections[1];

    assert_eq!(second.images.len(), 1);
    assert_eq!(second.images[0].src, "images/image1.png");
    // Empty alt gets the generated positional label.
    assert_eq!(second.images[0].alt, "Section visual 2-1");
    // Extracted images never render twice.
    assert!(!second.html.contains("<img"));

    assert_eq!(second.title.as_deref(), Some("What You Will Learn"));
    // The list items after the h2 are body, not heading candidates.
    assert_eq!(second.subtitle, None);
    assert_eq!(second.body_paragraphs.len(), 3);
    assert!(second.body_paragraphs[0].is_list_item);
    assert!(second.body_paragraphs[1].is_list_item);
    assert_eq!(second.body_paragraphs[0].html, "how to sit with stillness");
}

#[test]
fn anchors_in_body_are_rewritten_safe() {
    let sections = parse_sections(EXPORT_FIXTURE);
    let link_paragraph = &sections[1].body_paragraphs[2];
    assert!(link_paragraph.html.contains(
        r#"<a href="https://example.com/course" target="_blank" rel="noopener noreferrer">"#
    ));
    assert!(!link_paragraph.html.contains("class="));
}

#[test]
fn document_without_rules_is_one_section() {
    let sections = parse_sections("<p>Only Title</p><p>And a body line under it.</p>");
    assert_eq!(sections.len(), 1);
}

#[test]
fn script_and_style_content_never_leaks() {
    let html = concat!(
        "<script>window.alert('x')</script>",
        "<style>.c0{}</style>",
        "<p>Visible</p>"
    );
    let sections = parse_sections(html);
    assert_eq!(sections.len(), 1);
    assert!(!sections[0].html.contains("alert"));
    assert!(!sections[0].html.contains(".c0"));
}

#[test]
fn sanitized_body_html_is_stable_under_resanitization() {
    let sections = parse_sections(EXPORT_FIXTURE);
    for section in &sections {
        for paragraph in &section.body_paragraphs {
            assert_eq!(paragraph.html, sanitize_inline(&paragraph.html));
        }
    }
}

#[test]
fn sections_serialize_to_json() {
    let sections = parse_sections(EXPORT_FIXTURE);
    let json = serde_json::to_string(&sections).expect("sections serialize");
    assert!(json.contains("\"id\":\"section-1\""));
    assert!(json.contains("\"is_list_item\":true"));
}
