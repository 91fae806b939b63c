use super::*;

const DOC: &str = "1a2b3c4d-0000-0000-0000-000000000001";

#[test]
fn empty_content_renders_nothing() {
    assert!(render_plan("").is_empty());
}

#[test]
fn plain_text_renders_single_inline_segment() {
    assert_eq!(render_plan("Hello *there*"), vec![RenderedSegment::Inline("Hello <em>there</em>".to_owned())]);
}

#[test]
fn citation_in_sentence_keeps_surrounding_spaces() {
    let content = format!("See [PDF: {DOC}, Page: 5] for details");
    assert_eq!(
        render_plan(&content),
        vec![
            RenderedSegment::Inline("See ".to_owned()),
            RenderedSegment::Reference(PageRef::new(DOC, 5)),
            RenderedSegment::Inline(" for details".to_owned()),
        ]
    );
}

#[test]
fn citations_separated_by_blank_lines_render_back_to_back() {
    let plan = render_plan("A[PDF: abc-123, Page: 1]\n\n[PDF: abc-123, Page: 2]B");
    assert_eq!(
        plan,
        vec![
            RenderedSegment::Inline("A".to_owned()),
            RenderedSegment::Reference(PageRef::new("abc-123", 1)),
            RenderedSegment::Reference(PageRef::new("abc-123", 2)),
            RenderedSegment::Inline("B".to_owned()),
        ]
    );
}

#[test]
fn malformed_citation_renders_as_text() {
    assert_eq!(
        render_plan("[PDF: XYZ, Page: 5]"),
        vec![RenderedSegment::Inline("[PDF: XYZ, Page: 5]".to_owned())]
    );
}

#[test]
fn multi_paragraph_text_renders_as_block() {
    let plan = render_plan("First point.\n\nSecond point [PDF: ab, Page: 2]");
    assert_eq!(plan.len(), 2);
    assert_eq!(plan[0], RenderedSegment::Block("<p>First point.</p>\n<p>Second point</p>\n".to_owned()));
    assert_eq!(plan[1], RenderedSegment::Reference(PageRef::new("ab", 2)));
}

#[test]
fn render_plan_is_deterministic() {
    let content = format!("x [PDF: {DOC}, Page: 1] y\r\n[PDF: {DOC}, Page: 2]");
    assert_eq!(render_plan(&content), render_plan(&content));
}
