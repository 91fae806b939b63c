//! References page: the knowledge-base table.

use leptos::prelude::*;

use crate::components::app_layout::AppLayout;
use crate::components::references_table::ReferencesTable;
use crate::state::references::ReferencesState;

/// Reload the knowledge base into `ReferencesState`.
pub(crate) fn refresh_documents(references: RwSignal<ReferencesState>) {
    if references.with_untracked(|r| r.loading) {
        return;
    }
    references.update(|r| r.loading = true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_documents().await {
            Ok(documents) => {
                log::debug!("loaded {} documents", documents.len());
                references.update(|r| r.set_documents(documents));
            }
            Err(e) => {
                log::warn!("document list failed: {e}");
                references.update(|r| r.set_error(e));
            }
        }
    });
}

#[component]
pub fn ReferencesPage() -> impl IntoView {
    let references = expect_context::<RwSignal<ReferencesState>>();
    refresh_documents(references);

    view! {
        <AppLayout>
            <div class="references-page">
                <header class="page-header">
                    <h1>"References"</h1>
                    <button class="btn" on:click=move |_| refresh_documents(references)>
                        "Refresh"
                    </button>
                </header>
                <ReferencesTable/>
            </div>
        </AppLayout>
    }
}
