use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::AuthError;
use crate::application::services::{ChatError, ConversationError};

/// Opaque text returned for any failure the caller cannot act on.
pub const CHAT_FAILURE_MESSAGE: &str = "An error occurred while generating the response";
pub const INTERNAL_FAILURE_MESSAGE: &str = "An error occurred while processing the request";
pub const NOT_FOUND_MESSAGE: &str = "Conversation not found";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Internal(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            ApiError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, m),
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m),
            ApiError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m.to_string()),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<ChatError> for ApiError {
    fn from(error: ChatError) -> Self {
        match error {
            ChatError::EmptyMessage => ApiError::BadRequest("Message cannot be empty".to_string()),
            ChatError::NotFoundOrForbidden => ApiError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            ChatError::Repository(e) => {
                tracing::error!(error = %e, "Chat turn failed");
                ApiError::Internal(CHAT_FAILURE_MESSAGE)
            }
        }
    }
}

impl From<ConversationError> for ApiError {
    fn from(error: ConversationError) -> Self {
        match error {
            ConversationError::NotFoundOrForbidden => {
                ApiError::NotFound(NOT_FOUND_MESSAGE.to_string())
            }
            ConversationError::Repository(e) => {
                tracing::error!(error = %e, "Conversation request failed");
                ApiError::Internal(INTERNAL_FAILURE_MESSAGE)
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::Validation(m) | AuthError::Conflict(m) => ApiError::BadRequest(m),
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Incorrect Credentials".to_string())
            }
            AuthError::InvalidToken(reason) => {
                tracing::debug!(reason = %reason, "Token rejected");
                ApiError::Unauthorized("Invalid token.".to_string())
            }
            AuthError::TokenRevoked | AuthError::UnknownUser => {
                ApiError::Unauthorized("Invalid token.".to_string())
            }
            AuthError::Hashing(_) | AuthError::Signing(_) | AuthError::Repository(_) => {
                tracing::error!(error = %error, "Authentication request failed");
                ApiError::Internal(INTERNAL_FAILURE_MESSAGE)
            }
        }
    }
}
