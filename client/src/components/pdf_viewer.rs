//! Embedded PDF viewer pane.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendering is delegated to the browser's built-in PDF viewer through an
//! `<iframe>` pointed at `/api/documents/{id}/file#page=N`. The frame is
//! recreated on every navigation (`ViewerState::nav_seq`) because viewers do
//! not re-scroll when only the fragment changes.

use leptos::prelude::*;

use crate::state::references::ReferencesState;
use crate::state::viewer::ViewerState;

/// Viewer toolbar plus document frame, or a placeholder when nothing is open.
#[component]
pub fn PdfViewer() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let references = expect_context::<RwSignal<ReferencesState>>();

    // Pick up the page count once the knowledge base knows the document.
    Effect::new(move || {
        let Some(document_id) = viewer.with(|v| v.document_id.clone()) else {
            return;
        };
        let page_count = references.with(|r| r.find(&document_id).and_then(|doc| doc.page_count));
        if viewer.with_untracked(|v| v.page_count) != page_count {
            viewer.update(|v| v.set_page_count(page_count));
        }
    });

    let frame = Memo::new(move |_| viewer.with(ViewerState::frame_key));

    let title = move || {
        viewer.with(|v| v.document_id.clone()).map_or_else(
            || "No document".to_owned(),
            |id| references.with(|r| r.title_for(&id)).unwrap_or(id),
        )
    };

    view! {
        <section class="pdf-viewer">
            <header class="pdf-viewer__toolbar">
                <span class="pdf-viewer__title">{title}</span>
                <Show when=move || viewer.with(ViewerState::is_open)>
                    <button
                        class="btn pdf-viewer__nav"
                        title="Previous page"
                        disabled=move || viewer.with(|v| v.page <= 1)
                        on:click=move |_| viewer.update(ViewerState::prev_page)
                    >
                        "‹"
                    </button>
                    <span class="pdf-viewer__page">{move || viewer.with(ViewerState::page_indicator)}</span>
                    <button
                        class="btn pdf-viewer__nav"
                        title="Next page"
                        disabled=move || viewer.with(|v| v.page_count.is_some_and(|count| v.page >= count))
                        on:click=move |_| viewer.update(ViewerState::next_page)
                    >
                        "›"
                    </button>
                    <button class="btn pdf-viewer__close" title="Close document" on:click=move |_| viewer.update(ViewerState::close)>
                        "✕"
                    </button>
                </Show>
            </header>
            <div class="pdf-viewer__body">
                {move || match frame.get() {
                    Some((src, nav_seq)) => {
                        view! {
                            <iframe
                                class="pdf-viewer__frame"
                                src=src
                                title="PDF document"
                                data-nav-seq=nav_seq.to_string()
                            ></iframe>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <div class="pdf-viewer__empty">
                                "Click a page citation in the chat, or open a document from References."
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}
