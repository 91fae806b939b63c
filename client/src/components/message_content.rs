//! Assistant message body with interactive PDF citations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Assistant replies carry inline `[PDF: <id>, Page: <n>]` markers. This
//! component splits the text with `citations::parse_segments`, formats the
//! prose through `util::markdown` and renders each citation as a
//! `PageReference` wired to the host's navigation callback.

#[cfg(test)]
#[path = "message_content_test.rs"]
mod message_content_test;

use citations::{PageRef, Segment, parse_segments};
use leptos::prelude::*;

use crate::components::page_reference::PageReference;
use crate::util::markdown::render_markdown_inline;

/// Display-ready form of one parsed segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum RenderedSegment {
    /// Formatted text that flows on the surrounding line.
    Inline(String),
    /// Formatted block content (several paragraphs, lists, code).
    Block(String),
    Reference(PageRef),
}

/// Parse and format `content` into render order.
pub(crate) fn render_plan(content: &str) -> Vec<RenderedSegment> {
    parse_segments(content)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Reference(reference) => Some(RenderedSegment::Reference(reference)),
            Segment::Text(text) => {
                let html = render_markdown_inline(&text);
                if html.is_empty() {
                    None
                } else if html.ends_with('\n') {
                    Some(RenderedSegment::Block(html))
                } else {
                    Some(RenderedSegment::Inline(html))
                }
            }
        })
        .collect()
}

/// Message body renderer.
///
/// Segments are memoized on `content`; `on_page_click` is fixed for the
/// lifetime of the instance.
#[component]
pub fn MessageContent(#[prop(into)] content: Signal<String>, on_page_click: Callback<(String, u32)>) -> impl IntoView {
    let plan = Memo::new(move |_| content.with(|text| render_plan(text)));

    view! {
        <div class="message-content">
            {move || {
                plan.get()
                    .into_iter()
                    .map(|segment| match segment {
                        RenderedSegment::Inline(html) => {
                            view! { <span class="message-content__text" inner_html=html></span> }.into_any()
                        }
                        RenderedSegment::Block(html) => {
                            view! { <div class="message-content__block" inner_html=html></div> }.into_any()
                        }
                        RenderedSegment::Reference(reference) => {
                            view! { <PageReference reference=reference on_page_click=on_page_click/> }.into_any()
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
