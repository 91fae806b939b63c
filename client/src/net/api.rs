//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth, chat and
//! document failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatReply, ProfileUpdate, ReferenceDocument, User};

/// Path of the raw PDF bytes for a document, suitable for an `<iframe>` source.
pub fn document_file_url(document_id: &str) -> String {
    format!("/api/documents/{document_id}/file")
}

#[cfg(any(test, feature = "hydrate"))]
fn document_endpoint(document_id: &str) -> String {
    format!("/api/documents/{document_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn failed_message(operation: &str, status: u16) -> String {
    format!("{operation} failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_payload(message: &str) -> serde_json::Value {
    serde_json::json!({ "message": message })
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post("/api/auth/logout").send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}

/// Send a prompt to the assistant via `POST /api/chat`.
///
/// # Errors
///
/// Returns an error string if the request fails, the backend responds with a
/// non-OK status, or the reply body cannot be decoded.
pub async fn send_chat_message(message: &str) -> Result<ChatReply, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/chat")
            .json(&chat_payload(message))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("chat request", resp.status()));
        }
        resp.json::<ChatReply>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err("not available on server".to_owned())
    }
}

/// List the knowledge-base documents via `GET /api/documents`.
///
/// # Errors
///
/// Returns an error string if the request fails or the backend responds with
/// a non-OK status.
pub async fn fetch_documents() -> Result<Vec<ReferenceDocument>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/documents")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("document list", resp.status()));
        }
        resp.json::<Vec<ReferenceDocument>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Remove a document via `DELETE /api/documents/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the backend responds with
/// a non-OK status.
pub async fn delete_document(document_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = document_endpoint(document_id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("document delete", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = document_id;
        Err("not available on server".to_owned())
    }
}

/// Update the signed-in user's profile via `PATCH /api/users/me`.
///
/// # Errors
///
/// Returns an error string if the request fails, the backend responds with a
/// non-OK status, or the updated user cannot be decoded.
pub async fn update_profile(update: &ProfileUpdate) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch("/api/users/me")
            .json(update)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("profile update", resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = update;
        Err("not available on server".to_owned())
    }
}
