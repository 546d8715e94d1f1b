mod pg_pool;
mod repositories;
mod repository_set;

pub use repositories::{
    InMemoryConversationRepository, InMemoryRevokedTokenRepository, InMemoryUserRepository,
    PgConversationRepository, PgRevokedTokenRepository, PgUserRepository,
    UnavailableConversationRepository,
};
pub use repository_set::RepositorySet;

pub use pg_pool::{create_pool, run_migrations};
