//! HTTP-facing error type for the chat routes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;
use crate::services::chatbot::ChatbotError;

/// Body returned for any request that doesn't carry a usable `message`.
pub const NO_MESSAGE: &str = "No message received";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    /// The language model call failed. The text is passed through to the client.
    #[error("{0}")]
    Upstream(String),
}

impl From<ChatbotError> for AppError {
    fn from(e: ChatbotError) -> Self {
        AppError::Upstream(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
