// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::chatbot::{ChatClient, Persona};
use crate::services::gemini::GeminiClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub chatbot: Arc<dyn ChatClient>,
    pub persona: Persona,
}

impl AppState {
    pub fn new(chatbot: Arc<dyn ChatClient>) -> Self {
        Self {
            chatbot,
            persona: Persona::mediguide(),
        }
    }

    /// Wire up the real Gemini client from process configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(GeminiClient::new(config)))
    }
}
