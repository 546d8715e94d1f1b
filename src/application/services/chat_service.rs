use std::fmt::Write;
use std::sync::Arc;

use crate::application::ports::{ConversationRepository, InferenceGateway, RepositoryError};
use crate::domain::{Conversation, ConversationId, Message, MessageRole, UserId};
use crate::infrastructure::observability::sanitize_prompt;

use super::fallback_response;

/// Whether earlier turns are replayed to the model, and how many messages.
#[derive(Debug, Clone, Copy)]
pub struct HistoryPolicy {
    pub include: bool,
    pub limit: usize,
}

impl Default for HistoryPolicy {
    fn default() -> Self {
        Self {
            include: false,
            limit: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub message: String,
    pub conversation_id: Option<ConversationId>,
}

#[derive(Debug, Clone)]
pub struct ChatReply {
    pub response: String,
    pub conversation_id: ConversationId,
    pub title: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    /// Unknown conversation and conversation owned by someone else are
    /// reported identically.
    #[error("conversation not found")]
    NotFoundOrForbidden,
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}

/// Runs one chat turn: user message in, assistant message out, both persisted.
pub struct ChatService {
    conversations: Arc<dyn ConversationRepository>,
    gateway: Arc<dyn InferenceGateway>,
    history: HistoryPolicy,
}

impl ChatService {
    pub fn new(
        conversations: Arc<dyn ConversationRepository>,
        gateway: Arc<dyn InferenceGateway>,
        history: HistoryPolicy,
    ) -> Self {
        Self {
            conversations,
            gateway,
            history,
        }
    }

    #[tracing::instrument(skip(self, turn), fields(owner = %owner, gateway = self.gateway.name()))]
    pub async fn handle_turn(&self, owner: UserId, turn: ChatTurn) -> Result<ChatReply, ChatError> {
        let message = turn.message;
        if message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        tracing::debug!(prompt = %sanitize_prompt(&message), "Processing chat turn");

        let (conversation, history) = match turn.conversation_id {
            Some(id) => {
                let conversation = self
                    .conversations
                    .find_owned(id, owner)
                    .await?
                    .ok_or(ChatError::NotFoundOrForbidden)?;
                let history = if self.history.include {
                    self.conversations
                        .get_messages(id, owner, self.history.limit)
                        .await?
                } else {
                    Vec::new()
                };
                (conversation, history)
            }
            None => {
                let conversation = Conversation::from_first_message(owner, &message);
                self.conversations
                    .create_conversation(&conversation)
                    .await?;
                tracing::info!(conversation_id = %conversation.id, "Conversation created");
                (conversation, Vec::new())
            }
        };

        // Stored before generation so the turn survives a gateway failure.
        self.conversations
            .append_message(owner, &Message::user(conversation.id, message.as_str()))
            .await?;

        let prompt = build_prompt(&history, &message);
        let reply = match self.gateway.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    conversation_id = %conversation.id,
                    "Inference failed, answering with fallback"
                );
                fallback_response(&message)
            }
        };

        self.conversations
            .append_message(owner, &Message::assistant(conversation.id, reply.clone()))
            .await?;

        tracing::info!(conversation_id = %conversation.id, "Chat turn completed");

        Ok(ChatReply {
            response: reply,
            conversation_id: conversation.id,
            title: conversation.title,
        })
    }
}

/// Prefixes the current message with prior turns, one `Role: text` line each.
pub fn build_prompt(history: &[Message], message: &str) -> String {
    if history.is_empty() {
        return message.to_string();
    }

    let mut prompt = String::new();
    for entry in history {
        let speaker = match entry.role {
            MessageRole::User => "User",
            MessageRole::Assistant => "Assistant",
        };
        let _ = writeln!(prompt, "{}: {}", speaker, entry.content);
    }
    let _ = write!(prompt, "User: {}", message);
    prompt
}
