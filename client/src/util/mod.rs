//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and third-party
//! formatters from page and component logic to improve reuse and testability.

pub mod auth;
pub mod dark_mode;
pub mod markdown;
