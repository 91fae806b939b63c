//! PDF viewer navigation state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Citation clicks in chat messages land here through `open_page`; the
//! `PdfViewer` component renders whatever document/page this state names.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use crate::net::api::document_file_url;

/// Which document and page the viewer shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerState {
    pub document_id: Option<String>,
    /// One-based page number; meaningless while no document is open.
    pub page: u32,
    /// Known page count of the open document, used to clamp `next_page`.
    pub page_count: Option<u32>,
    /// Bumped on every navigation so repeated clicks on the same citation
    /// still re-scroll the embedded viewer.
    pub nav_seq: u64,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self { document_id: None, page: 1, page_count: None, nav_seq: 0 }
    }
}

impl ViewerState {
    /// Show `page` of `document_id`. Page `0` is treated as page 1.
    pub fn open_page(&mut self, document_id: impl Into<String>, page: u32) {
        let document_id = document_id.into();
        if self.document_id.as_deref() != Some(document_id.as_str()) {
            self.page_count = None;
        }
        self.document_id = Some(document_id);
        self.page = self.clamp(page);
        self.nav_seq += 1;
    }

    pub fn set_page_count(&mut self, page_count: Option<u32>) {
        self.page_count = page_count.filter(|count| *count > 0);
        self.page = self.clamp(self.page);
    }

    pub fn next_page(&mut self) {
        if self.document_id.is_none() {
            return;
        }
        let next = self.clamp(self.page.saturating_add(1));
        if next != self.page {
            self.page = next;
            self.nav_seq += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.document_id.is_none() || self.page <= 1 {
            return;
        }
        self.page -= 1;
        self.nav_seq += 1;
    }

    pub fn close(&mut self) {
        self.document_id = None;
        self.page = 1;
        self.page_count = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.document_id.is_some()
    }

    /// `<iframe>` source for the browser's PDF viewer, with a page fragment.
    #[must_use]
    pub fn frame_src(&self) -> Option<String> {
        self.document_id
            .as_deref()
            .map(|id| format!("{}#page={}", document_file_url(id), self.page))
    }

    /// Identity of the embedded frame: source plus navigation sequence.
    ///
    /// Page-count updates leave this unchanged, so only navigation rebuilds
    /// the frame.
    #[must_use]
    pub fn frame_key(&self) -> Option<(String, u64)> {
        self.frame_src().map(|src| (src, self.nav_seq))
    }

    /// Toolbar indicator such as `"3 / 12"` or `"3"` when the count is unknown.
    #[must_use]
    pub fn page_indicator(&self) -> String {
        match self.page_count {
            Some(count) => format!("{} / {count}", self.page),
            None => self.page.to_string(),
        }
    }

    fn clamp(&self, page: u32) -> u32 {
        let page = page.max(1);
        match self.page_count {
            Some(count) => page.min(count),
            None => page,
        }
    }
}
