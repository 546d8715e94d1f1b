mod in_memory_repository;
mod pg_conversation_repository;
mod pg_revoked_token_repository;
mod pg_user_repository;
mod unavailable_repository;

pub use in_memory_repository::{
    InMemoryConversationRepository, InMemoryRevokedTokenRepository, InMemoryUserRepository,
};
pub use pg_conversation_repository::PgConversationRepository;
pub use pg_revoked_token_repository::PgRevokedTokenRepository;
pub use pg_user_repository::PgUserRepository;
pub use unavailable_repository::UnavailableConversationRepository;
