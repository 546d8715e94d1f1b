use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{RepositoryError, RevokedTokenRepository};

pub struct PgRevokedTokenRepository {
    pool: PgPool,
}

impl PgRevokedTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevokedTokenRepository for PgRevokedTokenRepository {
    #[instrument(skip(self))]
    async fn revoke(
        &self,
        token_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        // Expired tokens fail signature validation on their own.
        let purged = sqlx::query("DELETE FROM revoked_tokens WHERE expires_at <= $1")
            .bind(Utc::now())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?
            .rows_affected();

        sqlx::query(
            r#"
            INSERT INTO revoked_tokens (token_id, expires_at, revoked_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (token_id) DO NOTHING
            "#,
        )
        .bind(token_id)
        .bind(expires_at)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        if purged > 0 {
            tracing::debug!(purged, "Dropped expired revocations");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn is_revoked(&self, token_id: Uuid) -> Result<bool, RepositoryError> {
        let revoked: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (SELECT 1 FROM revoked_tokens WHERE token_id = $1)
            "#,
        )
        .bind(token_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(revoked)
    }
}
