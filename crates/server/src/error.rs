use crate::corpus::CorpusError;
use crate::store::StoreError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Chat {0} not found")]
    ChatNotFound(String),

    #[error("Message {0} not found")]
    MessageNotFound(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("Match error: {0}")]
    Match(#[from] matcher::MatchError),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::ChatNotFound(_) | ServerError::MessageNotFound(_) | ServerError::NotFound => {
                StatusCode::NOT_FOUND
            }
            ServerError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ServerError::Corpus(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::Match(_)
            | ServerError::Snapshot(_)
            | ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::ChatNotFound(_) => "CHAT_NOT_FOUND",
            ServerError::MessageNotFound(_) => "MESSAGE_NOT_FOUND",
            ServerError::Timeout => "REQUEST_TIMEOUT",
            ServerError::Corpus(_) => "CORPUS_UNAVAILABLE",
            ServerError::Match(_) => "MATCH_ERROR",
            ServerError::Snapshot(_) => "SNAPSHOT_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::NotFound => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code().to_string();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(code = %error_code, %message, "request failed");
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                code: error_code,
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ChatNotFound(id) => ServerError::ChatNotFound(id),
            StoreError::MessageNotFound { message_id, .. } => ServerError::MessageNotFound(message_id),
            other @ (StoreError::Io(_) | StoreError::Json(_)) => {
                ServerError::Snapshot(other.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl From<tokio::task::JoinError> for ServerError {
    fn from(err: tokio::task::JoinError) -> Self {
        ServerError::Internal(format!("background task failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_not_found() {
        let err: ServerError = StoreError::ChatNotFound("c1".into()).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "CHAT_NOT_FOUND");

        let err: ServerError = StoreError::MessageNotFound {
            chat_id: "c1".into(),
            message_id: "m1".into(),
        }
        .into();
        assert_eq!(err.error_code(), "MESSAGE_NOT_FOUND");
        assert!(err.to_string().contains("m1"));
    }

    #[test]
    fn corpus_error_is_service_unavailable() {
        let err: ServerError = CorpusError::Unavailable {
            path: "data.md".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.error_code(), "CORPUS_UNAVAILABLE");
    }

    #[test]
    fn bad_request_code() {
        let err = ServerError::BadRequest("user_id must not be empty".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "BAD_REQUEST");
    }
}
