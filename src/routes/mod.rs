// src/routes/mod.rs
pub mod chat;

use std::path::Path;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

pub fn create_router(index_path: impl AsRef<Path>) -> Router<SharedState> {
    Router::new()
        .route_service("/", ServeFile::new(index_path.as_ref()))
        .route("/chat", post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}
