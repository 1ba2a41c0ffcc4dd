use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::Value;

use crate::{
    error::{AppError, NO_MESSAGE},
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_reply,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable chat body");
            return Err(AppError::BadRequest(NO_MESSAGE.to_string()));
        }
    };

    let Some(request) = ChatRequest::from_json(&body) else {
        return Err(AppError::BadRequest(NO_MESSAGE.to_string()));
    };

    tracing::info!(message = %request.message, "user sent message");

    let reply = generate_reply(state.chatbot.as_ref(), &state.persona, &request.message)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "AI error");
            AppError::from(e)
        })?;

    Ok(Json(ChatResponse { response: reply }))
}
