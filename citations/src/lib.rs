//! Inline PDF citation markers in assistant chat text.
//!
//! Assistant answers cite their sources with the literal token
//! `[PDF: <document-id>, Page: <page>]`. This crate splits a message into
//! prose and page references so UI crates can render every reference as an
//! interactive control.
//!
//! This crate is UI-framework agnostic so client crates can consume it directly.
//!
//! PARSING RULES
//! =============
//! - `\r\n` is normalized to `\n` before matching.
//! - The marker shape is bit-exact: brackets, `PDF: `, `, Page: ` and the
//!   single spaces are all required. The id is `[a-f0-9-]+`, the page is
//!   ASCII digits.
//! - A marker whose page is `0` or does not fit in `u32` stays plain text.
//! - Runs of `\n` touching a reference are dropped; other whitespace is kept.
//! - Empty text between references is never emitted.


use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[PDF: ([a-f0-9-]+), Page: ([0-9]+)\]").expect("MARKER_RE pattern is valid")
});

/// A citation of one page of one source document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRef {
    /// Lowercase hex/hyphen document identifier (UUID-like, not validated further).
    pub document_id: String,
    /// One-based page number.
    pub page: u32,
}

impl PageRef {
    #[must_use]
    pub fn new(document_id: impl Into<String>, page: u32) -> Self {
        Self { document_id: document_id.into(), page }
    }

    /// The wire form of this reference as emitted by the assistant backend.
    #[must_use]
    pub fn marker(&self) -> String {
        format!("[PDF: {}, Page: {}]", self.document_id, self.page)
    }

    /// Text shown on the interactive control.
    #[must_use]
    pub fn label(&self) -> String {
        self.page.to_string()
    }
}

/// One display unit of a parsed message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Segment {
    /// Prose, rendered through a markdown formatter.
    Text(String),
    /// A clickable page citation.
    Reference(PageRef),
}

impl Segment {
    /// Textual reconstruction of the segment, markers included.
    #[must_use]
    pub fn source_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Reference(reference) => Cow::Owned(reference.marker()),
        }
    }

    #[must_use]
    pub fn as_reference(&self) -> Option<&PageRef> {
        match self {
            Self::Reference(reference) => Some(reference),
            Self::Text(_) => None,
        }
    }
}

/// Replace every `\r\n` pair with `\n`. Borrows when there is nothing to do.
#[must_use]
pub fn normalize_line_endings(content: &str) -> Cow<'_, str> {
    if content.contains("\r\n") {
        Cow::Owned(content.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

/// Split message content into ordered text and reference segments.
///
/// Total over all inputs: text that does not form a valid marker is passed
/// through as [`Segment::Text`].
#[must_use]
pub fn parse_segments(content: &str) -> Vec<Segment> {
    let normalized = normalize_line_endings(content);
    let source = normalized.as_ref();

    let mut segments = Vec::new();
    let mut pending = String::new();
    let mut after_reference = false;
    let mut cursor = 0;

    for caps in MARKER_RE.captures_iter(source) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        pending.push_str(&source[cursor..whole.start()]);
        cursor = whole.end();

        match decode_marker(&caps) {
            Some(reference) => {
                push_text(&mut segments, &pending, after_reference, true);
                pending.clear();
                segments.push(Segment::Reference(reference));
                after_reference = true;
            }
            None => pending.push_str(whole.as_str()),
        }
    }

    pending.push_str(&source[cursor..]);
    push_text(&mut segments, &pending, after_reference, false);
    segments
}

/// All references cited by `content`, in order of appearance, duplicates kept.
#[must_use]
pub fn references(content: &str) -> Vec<PageRef> {
    parse_segments(content)
        .iter()
        .filter_map(Segment::as_reference)
        .cloned()
        .collect()
}

fn decode_marker(caps: &Captures<'_>) -> Option<PageRef> {
    let document_id = caps.get(1)?.as_str();
    let page = caps
        .get(2)?
        .as_str()
        .parse::<u32>()
        .ok()
        .filter(|page| *page > 0)?;
    Some(PageRef::new(document_id, page))
}

fn push_text(segments: &mut Vec<Segment>, text: &str, after_reference: bool, before_reference: bool) {
    let mut text = text;
    if after_reference {
        text = text.trim_start_matches('\n');
    }
    if before_reference {
        text = text.trim_end_matches('\n');
    }
    if !text.is_empty() {
        segments.push(Segment::Text(text.to_owned()));
    }
}
