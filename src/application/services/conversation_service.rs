use std::sync::Arc;

use crate::application::ports::{ConversationRepository, RepositoryError};
use crate::domain::{Conversation, ConversationId, UserId, derive_title};

pub const DEFAULT_CONVERSATION_TITLE: &str = "New conversation";

#[derive(Debug, thiserror::Error)]
pub enum ConversationError {
    #[error("conversation not found")]
    NotFoundOrForbidden,
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}

pub struct ConversationService {
    conversations: Arc<dyn ConversationRepository>,
}

impl ConversationService {
    pub fn new(conversations: Arc<dyn ConversationRepository>) -> Self {
        Self { conversations }
    }

    pub async fn list(&self, owner: UserId) -> Result<Vec<Conversation>, ConversationError> {
        Ok(self.conversations.list_for_owner(owner).await?)
    }

    pub async fn create(
        &self,
        owner: UserId,
        title: Option<String>,
    ) -> Result<Conversation, ConversationError> {
        let title = title
            .map(|t| derive_title(&t))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_CONVERSATION_TITLE.to_string());

        let conversation = Conversation::new(owner, title);
        self.conversations
            .create_conversation(&conversation)
            .await?;
        Ok(conversation)
    }

    /// Conversation with its ordered messages.
    pub async fn detail(
        &self,
        owner: UserId,
        id: ConversationId,
    ) -> Result<Conversation, ConversationError> {
        let mut conversation = self
            .conversations
            .find_owned(id, owner)
            .await?
            .ok_or(ConversationError::NotFoundOrForbidden)?;

        conversation.messages = self.conversations.list_messages(id, owner).await?;
        Ok(conversation)
    }
}
