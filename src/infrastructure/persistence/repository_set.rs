use std::sync::Arc;

use sqlx::PgPool;

use crate::application::ports::{
    ConversationRepository, RevokedTokenRepository, UserRepository,
};

use super::repositories::{
    InMemoryConversationRepository, InMemoryRevokedTokenRepository, InMemoryUserRepository,
    PgConversationRepository, PgRevokedTokenRepository, PgUserRepository,
};

/// The three stores the service needs, backed by one storage mode.
#[derive(Clone)]
pub struct RepositorySet {
    pub conversations: Arc<dyn ConversationRepository>,
    pub users: Arc<dyn UserRepository>,
    pub revoked_tokens: Arc<dyn RevokedTokenRepository>,
}

impl RepositorySet {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            conversations: Arc::new(PgConversationRepository::new(pool.clone())),
            users: Arc::new(PgUserRepository::new(pool.clone())),
            revoked_tokens: Arc::new(PgRevokedTokenRepository::new(pool)),
        }
    }

    pub fn in_memory() -> Self {
        Self::with_conversations(Arc::new(InMemoryConversationRepository::new()))
    }

    /// In-memory users and tokens around a caller-provided conversation store.
    pub fn with_conversations(conversations: Arc<dyn ConversationRepository>) -> Self {
        Self {
            conversations,
            users: Arc::new(InMemoryUserRepository::new()),
            revoked_tokens: Arc::new(InMemoryRevokedTokenRepository::new()),
        }
    }
}
