use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::{
    ConversationRepository, RepositoryError, RevokedTokenRepository, UserRepository,
};
use crate::domain::{Conversation, ConversationId, Message, User, UserId};

/// Process-local conversation store. Messages live inside their
/// conversation in insertion order.
#[derive(Default)]
pub struct InMemoryConversationRepository {
    conversations: RwLock<HashMap<ConversationId, Conversation>>,
}

impl InMemoryConversationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn conversation_count(&self) -> usize {
        self.conversations.read().await.len()
    }

    pub async fn message_count(&self) -> usize {
        self.conversations
            .read()
            .await
            .values()
            .map(|c| c.messages.len())
            .sum()
    }
}

#[async_trait::async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn create_conversation(
        &self,
        conversation: &Conversation,
    ) -> Result<(), RepositoryError> {
        let mut conversations = self.conversations.write().await;
        if conversations.contains_key(&conversation.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "conversation {} already exists",
                conversation.id
            )));
        }
        conversations.insert(conversation.id, conversation.clone());
        Ok(())
    }

    async fn find_owned(
        &self,
        id: ConversationId,
        owner: UserId,
    ) -> Result<Option<Conversation>, RepositoryError> {
        Ok(self
            .conversations
            .read()
            .await
            .get(&id)
            .filter(|c| c.is_owned_by(owner))
            .map(|c| Conversation {
                messages: Vec::new(),
                ..c.clone()
            }))
    }

    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<Conversation>, RepositoryError> {
        let mut owned: Vec<Conversation> = self
            .conversations
            .read()
            .await
            .values()
            .filter(|c| c.is_owned_by(owner))
            .map(|c| Conversation {
                messages: Vec::new(),
                ..c.clone()
            })
            .collect();
        owned.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(owned)
    }

    async fn append_message(
        &self,
        owner: UserId,
        message: &Message,
    ) -> Result<(), RepositoryError> {
        let mut conversations = self.conversations.write().await;
        let conversation = conversations
            .get_mut(&message.conversation_id)
            .filter(|c| c.is_owned_by(owner))
            .ok_or_else(|| {
                RepositoryError::NotFound(format!(
                    "conversation {} for owner {}",
                    message.conversation_id, owner
                ))
            })?;

        conversation.messages.push(message.clone());
        conversation.updated_at = conversation.updated_at.max(Utc::now());
        Ok(())
    }

    async fn get_messages(
        &self,
        conversation_id: ConversationId,
        owner: UserId,
        limit: usize,
    ) -> Result<Vec<Message>, RepositoryError> {
        let mut messages = self.list_messages(conversation_id, owner).await?;
        let skip = messages.len().saturating_sub(limit);
        messages.drain(..skip);
        Ok(messages)
    }

    async fn list_messages(
        &self,
        conversation_id: ConversationId,
        owner: UserId,
    ) -> Result<Vec<Message>, RepositoryError> {
        Ok(self
            .conversations
            .read()
            .await
            .get(&conversation_id)
            .filter(|c| c.is_owned_by(owner))
            .map(|c| c.messages.clone())
            .unwrap_or_default())
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<(), RepositoryError> {
        let mut users = self.users.write().await;
        let duplicate = users.values().any(|u| {
            u.username == user.username || (!user.email.is_empty() && u.email == user.email)
        });
        if duplicate {
            return Err(RepositoryError::ConstraintViolation(format!(
                "user {} already exists",
                user.username
            )));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn email_taken(&self, email: &str) -> Result<bool, RepositoryError> {
        Ok(!email.is_empty() && self.users.read().await.values().any(|u| u.email == email))
    }
}

/// Revoked token ids with their expiry. Entries past expiry are dropped on
/// the next revocation, since the token itself no longer verifies.
#[derive(Default)]
pub struct InMemoryRevokedTokenRepository {
    revoked: RwLock<HashMap<Uuid, DateTime<Utc>>>,
}

impl InMemoryRevokedTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn revoked_count(&self) -> usize {
        self.revoked.read().await.len()
    }
}

#[async_trait::async_trait]
impl RevokedTokenRepository for InMemoryRevokedTokenRepository {
    async fn revoke(&self, token_id: Uuid, expires_at: DateTime<Utc>) -> Result<(), RepositoryError> {
        let now = Utc::now();
        let mut revoked = self.revoked.write().await;
        revoked.retain(|_, expiry| *expiry > now);
        revoked.insert(token_id, expires_at);
        Ok(())
    }

    async fn is_revoked(&self, token_id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.revoked.read().await.contains_key(&token_id))
    }
}
