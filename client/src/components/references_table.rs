//! Knowledge-base table with filter, sortable headers and paging.
//!
//! ARCHITECTURE
//! ============
//! All row derivation lives in `ReferencesState`; this component only binds
//! controls to it and hands "Open" off to the PDF viewer.

#[cfg(test)]
#[path = "references_table_test.rs"]
mod references_table_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::references::{ReferencesState, SortColumn};
use crate::state::viewer::ViewerState;

const COLUMNS: [(SortColumn, &str); 5] = [
    (SortColumn::Title, "Title"),
    (SortColumn::Authors, "Authors"),
    (SortColumn::Year, "Year"),
    (SortColumn::Pages, "Pages"),
    (SortColumn::Added, "Added"),
];

/// Arrow suffix for a header, empty when the column is not the sort key.
fn sort_indicator(active: SortColumn, desc: bool, column: SortColumn) -> &'static str {
    match (active == column, desc) {
        (false, _) => "",
        (true, false) => " ↑",
        (true, true) => " ↓",
    }
}

fn optional_cell<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "—".to_owned(), |v| v.to_string())
}

/// Date part of an ISO-8601 timestamp.
fn added_cell(added_at: Option<&str>) -> String {
    optional_cell(added_at.map(|raw| raw.split('T').next().unwrap_or(raw)))
}

fn pager_label(page_index: usize, page_count: usize, total: usize) -> String {
    let noun = if total == 1 { "document" } else { "documents" };
    format!("Page {} of {page_count} · {total} {noun}", page_index + 1)
}

/// Table of knowledge-base documents.
#[component]
pub fn ReferencesTable() -> impl IntoView {
    let references = expect_context::<RwSignal<ReferencesState>>();
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let navigate = use_navigate();

    let deleting = RwSignal::new(None::<String>);

    let open_document = move |document_id: String, page_count: Option<u32>| {
        viewer.update(|v| {
            v.open_page(document_id, 1);
            v.set_page_count(page_count);
        });
        navigate("/", NavigateOptions::default());
    };

    let delete_document = move |document_id: String| {
        if deleting.get_untracked().is_some() {
            return;
        }
        deleting.set(Some(document_id.clone()));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_document(&document_id).await {
                Ok(()) => {
                    references.update(|r| r.remove(&document_id));
                    viewer.update(|v| {
                        if v.document_id.as_deref() == Some(document_id.as_str()) {
                            v.close();
                        }
                    });
                }
                Err(e) => {
                    log::warn!("document delete failed: {e}");
                    references.update(|r| r.error = Some(e));
                }
            }
            deleting.set(None);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = document_id;
            deleting.set(None);
        }
    };

    view! {
        <div class="references-table">
            <div class="references-table__toolbar">
                <input
                    class="references-table__filter"
                    type="search"
                    placeholder="Filter by title, author or year..."
                    prop:value=move || references.with(|r| r.filter.clone())
                    on:input=move |ev| references.update(|r| r.set_filter(event_target_value(&ev)))
                />
            </div>
            <Show when=move || references.with(|r| r.error.is_some())>
                <p class="references-table__error">{move || references.with(|r| r.error.clone().unwrap_or_default())}</p>
            </Show>
            <table class="references-table__grid">
                <thead>
                    <tr>
                        {COLUMNS
                            .into_iter()
                            .map(|(column, label)| {
                                view! {
                                    <th>
                                        <button
                                            class="references-table__head-btn"
                                            on:click=move |_| references.update(|r| r.toggle_sort(column))
                                        >
                                            {label}
                                            {move || references.with(|r| sort_indicator(r.sort, r.sort_desc, column))}
                                        </button>
                                    </th>
                                }
                            })
                            .collect_view()}
                        <th class="references-table__actions-head"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let state = references.get();
                        if state.loading {
                            return view! {
                                <tr><td class="references-table__empty" colspan="6">"Loading documents..."</td></tr>
                            }
                                .into_any();
                        }
                        let rows = state.visible_rows();
                        if rows.is_empty() {
                            return view! {
                                <tr><td class="references-table__empty" colspan="6">"No documents found."</td></tr>
                            }
                                .into_any();
                        }
                        rows.into_iter()
                            .map(|doc| {
                                let open_id = doc.id.clone();
                                let delete_id = doc.id.clone();
                                let busy_id = doc.id.clone();
                                let page_count = doc.page_count;
                                let open_document = open_document.clone();
                                view! {
                                    <tr>
                                        <td class="references-table__title">{doc.title.clone()}</td>
                                        <td>{doc.authors_display()}</td>
                                        <td>{optional_cell(doc.year)}</td>
                                        <td>{optional_cell(doc.page_count)}</td>
                                        <td>{added_cell(doc.added_at.as_deref())}</td>
                                        <td class="references-table__actions">
                                            <button
                                                class="btn btn--primary"
                                                on:click=move |_| open_document(open_id.clone(), page_count)
                                            >
                                                "Open"
                                            </button>
                                            <button
                                                class="btn btn--danger"
                                                disabled=move || deleting.get().as_deref() == Some(busy_id.as_str())
                                                on:click=move |_| delete_document(delete_id.clone())
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
            <div class="references-table__pager">
                <button
                    class="btn"
                    disabled=move || references.with(|r| r.page_index == 0)
                    on:click=move |_| references.update(ReferencesState::prev_page)
                >
                    "Previous"
                </button>
                <span class="references-table__pager-label">
                    {move || references.with(|r| pager_label(r.page_index, r.page_count(), r.filtered().len()))}
                </span>
                <button
                    class="btn"
                    disabled=move || references.with(|r| r.page_index + 1 >= r.page_count())
                    on:click=move |_| references.update(ReferencesState::next_page)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
