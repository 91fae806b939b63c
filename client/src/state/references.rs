//! Knowledge-base table state: loaded documents plus filter, sort and paging.
//!
//! DESIGN
//! ======
//! Rows are derived on demand from `documents` so filter/sort/page changes
//! never mutate the loaded list.

#[cfg(test)]
#[path = "references_test.rs"]
mod references_test;

use std::cmp::Ordering;

use crate::net::types::ReferenceDocument;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sortable table columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortColumn {
    #[default]
    Title,
    Authors,
    Year,
    Pages,
    Added,
}

#[derive(Clone, Debug)]
pub struct ReferencesState {
    pub documents: Vec<ReferenceDocument>,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: String,
    pub sort: SortColumn,
    pub sort_desc: bool,
    /// Zero-based index of the visible table page.
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for ReferencesState {
    fn default() -> Self {
        Self {
            documents: Vec::new(),
            loading: false,
            error: None,
            filter: String::new(),
            sort: SortColumn::Title,
            sort_desc: false,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ReferencesState {
    pub fn set_documents(&mut self, documents: Vec<ReferenceDocument>) {
        self.documents = documents;
        self.loading = false;
        self.error = None;
        self.page_index = self.page_index.min(self.page_count() - 1);
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.loading = false;
        self.error = Some(error.into());
    }

    /// Change the filter text and jump back to the first page.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page_index = 0;
    }

    /// Sort by `column`, flipping direction when it is already active.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if self.sort == column {
            self.sort_desc = !self.sort_desc;
        } else {
            self.sort = column;
            self.sort_desc = false;
        }
    }

    pub fn next_page(&mut self) {
        if self.page_index + 1 < self.page_count() {
            self.page_index += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    /// Drop a deleted document, keeping the current page in range.
    pub fn remove(&mut self, document_id: &str) {
        self.documents.retain(|doc| doc.id != document_id);
        self.page_index = self.page_index.min(self.page_count() - 1);
    }

    #[must_use]
    pub fn find(&self, document_id: &str) -> Option<&ReferenceDocument> {
        self.documents.iter().find(|doc| doc.id == document_id)
    }

    /// Title for a cited document, if it is in the loaded knowledge base.
    #[must_use]
    pub fn title_for(&self, document_id: &str) -> Option<String> {
        self.find(document_id).map(|doc| doc.title.clone())
    }

    /// Documents passing the filter, in sort order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&ReferenceDocument> {
        let needle = self.filter.trim().to_lowercase();
        let mut rows = self
            .documents
            .iter()
            .filter(|doc| needle.is_empty() || matches_filter(doc, &needle))
            .collect::<Vec<_>>();
        rows.sort_by(|a, b| compare(a, b, self.sort, self.sort_desc).then_with(|| a.id.cmp(&b.id)));
        rows
    }

    /// Rows on the current table page.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<ReferenceDocument> {
        self.filtered()
            .into_iter()
            .skip(self.page_index * self.page_size)
            .take(self.page_size)
            .cloned()
            .collect()
    }

    /// Number of table pages; at least one so an empty table still has a page.
    #[must_use]
    pub fn page_count(&self) -> usize {
        let size = self.page_size.max(1);
        self.filtered().len().div_ceil(size).max(1)
    }
}

fn matches_filter(doc: &ReferenceDocument, needle: &str) -> bool {
    doc.title.to_lowercase().contains(needle)
        || doc
            .authors
            .iter()
            .any(|author| author.to_lowercase().contains(needle))
        || doc.year.is_some_and(|year| year.to_string().contains(needle))
}

fn compare(a: &ReferenceDocument, b: &ReferenceDocument, column: SortColumn, desc: bool) -> Ordering {
    let directed = |ord: Ordering| if desc { ord.reverse() } else { ord };
    match column {
        SortColumn::Title => directed(a.title.to_lowercase().cmp(&b.title.to_lowercase())),
        SortColumn::Authors => directed(
            a.authors_display()
                .to_lowercase()
                .cmp(&b.authors_display().to_lowercase()),
        ),
        SortColumn::Year => none_last(a.year, b.year, desc),
        SortColumn::Pages => none_last(a.page_count, b.page_count, desc),
        SortColumn::Added => none_last(a.added_at.as_deref(), b.added_at.as_deref(), desc),
    }
}

/// Missing values sort after present ones in either direction.
fn none_last<T: Ord>(a: Option<T>, b: Option<T>, desc: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if desc => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
