use crate::domain::{Conversation, ConversationId, Message, UserId};
use async_trait::async_trait;

use super::RepositoryError;

/// Conversation storage. Every lookup is filtered by owner; there is no
/// unscoped read path.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    async fn create_conversation(&self, conversation: &Conversation)
    -> Result<(), RepositoryError>;

    /// Returns the conversation (without messages) only when `owner` owns it.
    async fn find_owned(
        &self,
        id: ConversationId,
        owner: UserId,
    ) -> Result<Option<Conversation>, RepositoryError>;

    /// Conversations of `owner`, most recently updated first.
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<Conversation>, RepositoryError>;

    /// Appends a message to a conversation `owner` owns and refreshes its
    /// `updated_at`. Fails with [`RepositoryError::NotFound`] otherwise.
    async fn append_message(&self, owner: UserId, message: &Message)
    -> Result<(), RepositoryError>;

    /// The most recent `limit` messages, oldest first. Empty when `owner`
    /// does not own the conversation.
    async fn get_messages(
        &self,
        conversation_id: ConversationId,
        owner: UserId,
        limit: usize,
    ) -> Result<Vec<Message>, RepositoryError>;

    /// Every message of the conversation, oldest first. Empty when `owner`
    /// does not own the conversation.
    async fn list_messages(
        &self,
        conversation_id: ConversationId,
        owner: UserId,
    ) -> Result<Vec<Message>, RepositoryError>;

    async fn health_check(&self) -> Result<(), RepositoryError>;
}
