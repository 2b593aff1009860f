// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::translator::{ProviderError, TranslateClient};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub translator: TranslateClient,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        Ok(Self {
            translator: TranslateClient::from_config(config)?,
        })
    }
}
