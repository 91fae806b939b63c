//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render workspace chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod app_layout;
pub mod app_sidebar;
pub mod chat_panel;
pub mod message_content;
pub mod page_reference;
pub mod pdf_viewer;
pub mod references_table;
pub mod settings_nav;
