use super::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("incorrect credentials")]
    InvalidCredentials,
    #[error("invalid token: {0}")]
    InvalidToken(String),
    #[error("token has been revoked")]
    TokenRevoked,
    #[error("user not found")]
    UnknownUser,
    #[error("credential hashing failed: {0}")]
    Hashing(String),
    #[error("token signing failed: {0}")]
    Signing(String),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
