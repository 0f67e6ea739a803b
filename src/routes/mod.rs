//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two surfaces under one Axum router: the JSON relay endpoint at
//! `/api/chat` and the chat page at `/`. The page is compiled into the
//! binary so one process serves the whole product on one port.

pub mod chat;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

const CHAT_PAGE: &str = include_str!("../../templates/chat.html");

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/api/chat", post(chat::chat))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// `GET /` — the chat page.
async fn index() -> Html<&'static str> {
    Html(CHAT_PAGE)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
