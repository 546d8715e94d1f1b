use crate::application::ports::{ConversationRepository, RepositoryError};
use crate::domain::{Conversation, ConversationId, Message, UserId};

/// Conversation store whose backend is down: every call fails with
/// [`RepositoryError::ConnectionFailed`].
pub struct UnavailableConversationRepository;

fn down() -> RepositoryError {
    RepositoryError::ConnectionFailed("connection refused (os error 111)".to_string())
}

#[async_trait::async_trait]
impl ConversationRepository for UnavailableConversationRepository {
    async fn create_conversation(&self, _: &Conversation) -> Result<(), RepositoryError> {
        Err(down())
    }

    async fn find_owned(
        &self,
        _: ConversationId,
        _: UserId,
    ) -> Result<Option<Conversation>, RepositoryError> {
        Err(down())
    }

    async fn list_for_owner(&self, _: UserId) -> Result<Vec<Conversation>, RepositoryError> {
        Err(down())
    }

    async fn append_message(&self, _: UserId, _: &Message) -> Result<(), RepositoryError> {
        Err(down())
    }

    async fn get_messages(
        &self,
        _: ConversationId,
        _: UserId,
        _: usize,
    ) -> Result<Vec<Message>, RepositoryError> {
        Err(down())
    }

    async fn list_messages(
        &self,
        _: ConversationId,
        _: UserId,
    ) -> Result<Vec<Message>, RepositoryError> {
        Err(down())
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        Err(down())
    }
}
