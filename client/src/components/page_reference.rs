//! Inline citation control for one cited PDF page.
//!
//! DESIGN
//! ======
//! The control is an anchor so it reads as a link and stays keyboard
//! reachable, but activation never navigates: the default action is
//! suppressed and the host callback decides what "open page" means.

#[cfg(test)]
#[path = "page_reference_test.rs"]
mod page_reference_test;

use citations::PageRef;
use leptos::prelude::*;

/// Clickable page-number pill that reports `(document_id, page)` on activation.
///
/// The click handler is built once per instance; a different reference or
/// callback produces a new instance rather than rebinding.
#[component]
pub fn PageReference(reference: PageRef, on_page_click: Callback<(String, u32)>) -> impl IntoView {
    let label = reference.label();
    let title = format!("Open page {}", reference.page);
    let on_click = move |ev: leptos::ev::MouseEvent| {
        activate(|| ev.prevent_default(), &reference, |id, page| on_page_click.run((id, page)));
    };

    view! {
        <a
            class="page-reference"
            href="#"
            role="button"
            title=title.clone()
            aria-label=title
            on:click=on_click
        >
            {label}
        </a>
    }
}

/// Suppress the default action, then report the reference exactly once.
pub(crate) fn activate<P, F>(prevent_default: P, reference: &PageRef, on_page_click: F)
where
    P: FnOnce(),
    F: FnOnce(String, u32),
{
    prevent_default();
    on_page_click(reference.document_id.clone(), reference.page);
}
