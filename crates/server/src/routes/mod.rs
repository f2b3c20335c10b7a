//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `health`: Health checks, readiness, and metrics
//! - `chats`: Chat creation, listing and lookup
//! - `messages`: Asking questions and rating answers

pub mod chats;
pub mod health;
pub mod messages;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
///
/// # Response
///
/// ```json
/// {
///   "name": "lineqa",
///   "version": "0.1.0",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "lineqa",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "POST /chats",
            "GET /chats?user_id=",
            "GET /chats/{chat_id}",
            "POST /chats/{chat_id}/messages",
            "POST /chats/{chat_id}/messages/{message_id}/feedback",
            "GET /health",
            "GET /ready",
            "GET /metrics"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
