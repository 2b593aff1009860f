// src/message.rs
use serde::{Deserialize, Serialize};

// Fields are Option so a missing key reaches the handler's own validation
// instead of being rejected by the deserializer.
#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub lang: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
