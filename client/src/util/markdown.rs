//! Markdown formatting for assistant message text.
//!
//! SYSTEM CONTEXT
//! ==============
//! Assistant replies are split around citation markers before formatting, so a
//! sentence like `See [PDF: …] for details` reaches this module as two
//! fragments. `render_markdown_inline` keeps such fragments on one line.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, html};

/// Render markdown to HTML with raw HTML stripped.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // Safety: drop inline/block raw HTML from model output before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Render a fragment that sits next to a citation.
///
/// A single paragraph loses its `<p>` wrapper and keeps one space on each side
/// where the fragment had surrounding whitespace. Block content (lists,
/// several paragraphs, code) is returned as rendered.
pub fn render_markdown_inline(markdown: &str) -> String {
    if markdown.trim().is_empty() {
        return if markdown.is_empty() { String::new() } else { " ".to_owned() };
    }

    let rendered = render_markdown_html(markdown);
    let Some(inner) = single_paragraph(&rendered) else {
        return rendered;
    };

    let mut out = String::with_capacity(inner.len() + 2);
    if markdown.starts_with(char::is_whitespace) {
        out.push(' ');
    }
    out.push_str(inner);
    if markdown.ends_with(char::is_whitespace) {
        out.push(' ');
    }
    out
}

fn single_paragraph(rendered: &str) -> Option<&str> {
    let inner = rendered.strip_prefix("<p>")?.strip_suffix("</p>\n")?;
    (!inner.contains("<p>")).then_some(inner)
}
