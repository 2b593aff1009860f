// src/routes/mod.rs
pub mod chat;

use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/chat", post(chat_handler))
        .layer(TraceLayer::new_for_http())
}

// Liveness check, nothing more.
async fn root_handler() -> &'static str {
    "Translation gateway is up and running."
}
