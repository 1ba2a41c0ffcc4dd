#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use mediguide_backend::services::chatbot::{
    ChatClient, ChatbotError, ChatbotResult, GenerationRequest,
};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub prompt: String,
    pub system_instruction: String,
    pub temperature: f32,
}

/// Canned `ChatClient` that remembers every call it receives.
pub struct StubClient {
    outcome: Result<String, String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubClient {
    pub fn replying(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: &str) -> Self {
        Self {
            outcome: Err(error.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatClient for StubClient {
    async fn generate(&self, request: GenerationRequest<'_>) -> ChatbotResult<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: request.prompt.to_string(),
            system_instruction: request.system_instruction.to_string(),
            temperature: request.temperature,
        });
        self.outcome.clone().map_err(ChatbotError::Api)
    }
}

pub fn index_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static/index.html")
}
