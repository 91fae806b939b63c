//! Workspace page: assistant chat next to the PDF viewer.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It owns the citation callback:
//! a click on a page reference in the chat opens that page in the viewer.

use leptos::prelude::*;

use crate::components::app_layout::AppLayout;
use crate::components::chat_panel::ChatPanel;
use crate::components::pdf_viewer::PdfViewer;
use crate::pages::references::refresh_documents;
use crate::state::references::ReferencesState;
use crate::state::viewer::ViewerState;

#[component]
pub fn WorkspacePage() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let references = expect_context::<RwSignal<ReferencesState>>();

    // Titles and page counts for the viewer toolbar come from the knowledge base.
    if references.with_untracked(|r| r.documents.is_empty()) {
        refresh_documents(references);
    }

    let on_page_click = Callback::new(move |(document_id, page): (String, u32)| {
        #[cfg(feature = "hydrate")]
        log::debug!("open citation {document_id} p.{page}");
        let page_count = references.with_untracked(|r| r.find(&document_id).and_then(|doc| doc.page_count));
        viewer.update(|v| {
            v.open_page(document_id, page);
            v.set_page_count(page_count);
        });
    });

    view! {
        <AppLayout>
            <div class="workspace">
                <ChatPanel on_page_click=on_page_click/>
                <PdfViewer/>
            </div>
        </AppLayout>
    }
}
