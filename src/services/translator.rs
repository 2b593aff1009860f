// src/services/translator.rs
//
// Client for the public Google Translate endpoint. The endpoint is not an
// official API: it answers GET /translate_a/single with a nested JSON array
// whose first element lists translated segments.

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("provider returned HTTP {status}")]
    Api { status: u16 },

    #[error("unexpected provider response: {0}")]
    Parse(String),
}

#[derive(Debug, Clone)]
pub struct TranslateClient {
    http: Client,
    base_url: String,
}

impl TranslateClient {
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(config.provider_timeout)
            .user_agent(config.provider_user_agent.clone())
            .build()
            .map_err(ProviderError::Network)?;

        Ok(Self {
            http,
            base_url: config.provider_base_url.trim_end_matches('/').to_string(),
        })
    }

    // Translate `text` into `target_lang`, letting the provider detect the
    // source language. One call, no retries.
    pub async fn translate(&self, text: &str, target_lang: &str) -> Result<String, ProviderError> {
        let url = format!("{}/translate_a/single", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Api {
                status: response.status().as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        extract_translation(&body)
    }
}

// The payload looks like [[["Hola", "Hello", ...], ...], ...]; long inputs
// come back split over several segments.
fn extract_translation(body: &Value) -> Result<String, ProviderError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| ProviderError::Parse("missing translation segments".to_string()))?;

    let mut reply = String::new();
    for segment in segments {
        if let Some(chunk) = segment.get(0).and_then(Value::as_str) {
            reply.push_str(chunk);
        }
    }

    if reply.is_empty() {
        return Err(ProviderError::Parse("empty translation".to_string()));
    }

    Ok(reply)
}
