use crate::domain::{User, UserId};
use async_trait::async_trait;

use super::RepositoryError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with [`RepositoryError::ConstraintViolation`] on a duplicate
    /// username or non-empty email.
    async fn create(&self, user: &User) -> Result<(), RepositoryError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    async fn email_taken(&self, email: &str) -> Result<bool, RepositoryError>;
}
