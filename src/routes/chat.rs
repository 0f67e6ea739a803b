//! Chat relay route.
//!
//! The readiness check runs before anything else so a misconfigured process
//! never attempts network I/O. Upstream failures are logged in full here and
//! surface to the caller only as a fixed sentence.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::services::chat::{self, WireTurn};
use crate::state::AppState;

/// Fixed response text when no LLM client was initialized at startup.
pub(crate) const NOT_READY_TEXT: &str =
    "Error: AI client is not initialized. Please ensure your API key is configured correctly.";

/// Fixed response text for any upstream failure. Never carries upstream detail.
pub(crate) const UPSTREAM_ERROR_TEXT: &str =
    "An internal error occurred while processing your request. Please try again.";

/// Fixed error text for a missing or empty conversation.
pub(crate) const NO_CONTENT_TEXT: &str = "No content provided.";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Full conversation history, oldest first. Absent key means empty.
    #[serde(default)]
    pub contents: Vec<WireTurn>,
}

/// `POST /api/chat` — relay a conversation to the completion API.
pub async fn chat(State(state): State<AppState>, Json(body): Json<ChatRequest>) -> Response {
    let Some(llm) = &state.llm else {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "text": NOT_READY_TEXT }))).into_response();
    };

    if body.contents.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": NO_CONTENT_TEXT }))).into_response();
    }

    match chat::relay_chat(llm, &body.contents).await {
        Ok(text) => (StatusCode::OK, Json(json!({ "text": text }))).into_response(),
        Err(e) => {
            error!(error = ?e, "chat: upstream call failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "text": UPSTREAM_ERROR_TEXT }))).into_response()
        }
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
