use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::services::ConversationError;
use crate::domain::{Conversation, ConversationId, Message};
use crate::presentation::extractors::AuthenticatedUser;
use crate::presentation::state::AppState;

use super::ApiError;

#[derive(Deserialize, Default)]
pub struct CreateConversationRequest {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Serialize)]
pub struct ConversationSummary {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize)]
pub struct MessageView {
    pub id: String,
    pub role: String,
    pub content: String,
    pub created_at: String,
}

#[derive(Serialize)]
pub struct ConversationDetail {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
    pub messages: Vec<MessageView>,
}

impl From<&Conversation> for ConversationSummary {
    fn from(conversation: &Conversation) -> Self {
        Self {
            id: conversation.id.to_string(),
            title: conversation.title.clone(),
            created_at: conversation.created_at.to_rfc3339(),
            updated_at: conversation.updated_at.to_rfc3339(),
        }
    }
}

impl From<&Message> for MessageView {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.to_string(),
            role: message.role.as_str().to_string(),
            content: message.content.clone(),
            created_at: message.created_at.to_rfc3339(),
        }
    }
}

#[tracing::instrument(skip(state, user), fields(user_id = %user.user_id))]
pub async fn list_conversations_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let conversations = state.conversation_service.list(user.user_id).await?;
    let summaries: Vec<ConversationSummary> =
        conversations.iter().map(ConversationSummary::from).collect();
    Ok((StatusCode::OK, Json(summaries)))
}

#[tracing::instrument(skip(state, user, body), fields(user_id = %user.user_id))]
pub async fn create_conversation_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    // The body is optional; an empty one means "untitled".
    let request: CreateConversationRequest = if body.iter().all(u8::is_ascii_whitespace) {
        CreateConversationRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e)))?
    };
    let conversation = state
        .conversation_service
        .create(user.user_id, request.title)
        .await?;

    tracing::info!(conversation_id = %conversation.id, "Conversation created");
    Ok((
        StatusCode::CREATED,
        Json(ConversationSummary::from(&conversation)),
    ))
}

#[tracing::instrument(skip(state, user), fields(user_id = %user.user_id))]
pub async fn conversation_detail_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(conversation_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = ConversationId::parse(&conversation_id)
        .ok_or(ConversationError::NotFoundOrForbidden)?;
    let conversation = state.conversation_service.detail(user.user_id, id).await?;

    Ok((
        StatusCode::OK,
        Json(ConversationDetail {
            id: conversation.id.to_string(),
            title: conversation.title.clone(),
            created_at: conversation.created_at.to_rfc3339(),
            updated_at: conversation.updated_at.to_rfc3339(),
            messages: conversation.messages.iter().map(MessageView::from).collect(),
        }),
    ))
}
