use super::*;

// =============================================================
// render_markdown_html
// =============================================================

#[test]
fn renders_emphasis() {
    assert_eq!(render_markdown_html("**bold**"), "<p><strong>bold</strong></p>\n");
}

#[test]
fn drops_raw_block_html() {
    assert_eq!(render_markdown_html("<script>alert(1)</script>"), "");
}

#[test]
fn drops_raw_inline_html_but_keeps_text() {
    assert_eq!(render_markdown_html("a <b>x</b>"), "<p>a x</p>\n");
}

#[test]
fn renders_tables() {
    let html = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(html.contains("<table>"));
}

#[test]
fn escapes_angle_brackets_in_text() {
    assert_eq!(render_markdown_html("a < b"), "<p>a &lt; b</p>\n");
}

// =============================================================
// render_markdown_inline
// =============================================================

#[test]
fn inline_keeps_trailing_space_before_citation() {
    assert_eq!(render_markdown_inline("See "), "See ");
}

#[test]
fn inline_keeps_leading_space_after_citation() {
    assert_eq!(render_markdown_inline(" for details"), " for details");
}

#[test]
fn inline_unwraps_formatted_paragraph() {
    assert_eq!(render_markdown_inline("**Note:** "), "<strong>Note:</strong> ");
}

#[test]
fn inline_leaves_block_content_alone() {
    assert_eq!(render_markdown_inline("one\n\ntwo"), "<p>one</p>\n<p>two</p>\n");
    assert!(render_markdown_inline("- a\n- b").starts_with("<ul>"));
}

#[test]
fn inline_whitespace_only_becomes_single_space() {
    assert_eq!(render_markdown_inline("   "), " ");
    assert_eq!(render_markdown_inline(""), "");
}
