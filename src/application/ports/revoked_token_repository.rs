use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::RepositoryError;

/// Deny-list of refresh token ids invalidated by logout.
#[async_trait]
pub trait RevokedTokenRepository: Send + Sync {
    async fn revoke(&self, token_id: Uuid, expires_at: DateTime<Utc>)
    -> Result<(), RepositoryError>;

    async fn is_revoked(&self, token_id: Uuid) -> Result<bool, RepositoryError>;
}
