//! Reactive state containers shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module holds a plain `Clone + Default` struct that `app::App` wraps in
//! an `RwSignal` and provides to pages and components.

pub mod auth;
pub mod chat;
pub mod references;
pub mod ui;
pub mod viewer;
