use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::services::{ChatError, ChatTurn};
use crate::domain::ConversationId;
use crate::presentation::extractors::AuthenticatedUser;
use crate::presentation::state::AppState;

use super::ApiError;

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub conversation_id: String,
    pub title: String,
}

#[tracing::instrument(skip(state, user, request), fields(user_id = %user.user_id))]
pub async fn chat_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // A malformed id cannot name a conversation the caller owns.
    let conversation_id = match request.conversation_id.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(ConversationId::parse(raw).ok_or(ChatError::NotFoundOrForbidden)?),
    };

    let reply = state
        .chat_service
        .handle_turn(
            user.user_id,
            ChatTurn {
                message: request.message,
                conversation_id,
            },
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(ChatResponse {
            response: reply.response,
            conversation_id: reply.conversation_id.to_string(),
            title: reply.title,
        }),
    ))
}
