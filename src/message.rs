// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    /// Pull `message` out of an arbitrary JSON body.
    ///
    /// Returns `None` unless the body is an object whose `message` is a
    /// non-empty string. Other keys are ignored and the text is kept as sent.
    pub fn from_json(body: &Value) -> Option<Self> {
        let message = body.as_object()?.get("message")?.as_str()?;
        if message.is_empty() {
            return None;
        }
        Some(Self {
            message: message.to_string(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
