//! Shared REST DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror backend JSON payloads so serde round-trips stay lossless.
//! Optional fields default when the backend omits them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Sign-in email, if the identity provider shared one.
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Author of a chat message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    #[default]
    User,
    Assistant,
    /// Local-only row describing a failed request.
    Error,
}

/// A single entry in the chat history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    /// Raw text; assistant content may contain citation markers.
    pub content: String,
}

/// Backend answer to a chat prompt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub content: String,
}

/// A source document in the user's knowledge base.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDocument {
    /// Lowercase UUID, the same id used in citation markers.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub page_count: Option<u32>,
    /// ISO-8601 date the document was added.
    #[serde(default)]
    pub added_at: Option<String>,
}

impl ReferenceDocument {
    /// Authors joined for display, `"—"` when unknown.
    #[must_use]
    pub fn authors_display(&self) -> String {
        if self.authors.is_empty() {
            "—".to_owned()
        } else {
            self.authors.join(", ")
        }
    }
}

/// Body of `PATCH /api/users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
}
