// src/routes/chat.rs
use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let (message, lang) = match (payload.message.as_deref(), payload.lang.as_deref()) {
        (Some(message), Some(lang)) if !message.is_empty() && !lang.is_empty() => (message, lang),
        _ => return Err(AppError::MissingFields),
    };

    let reply = state.translator.translate(message, lang).await?;

    Ok(Json(ChatResponse { reply }))
}
