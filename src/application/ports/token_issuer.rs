use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::User;

use super::AuthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub username: String,
    pub jti: Uuid,
    pub token_type: TokenType,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: TokenClaims,
}

pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User, token_type: TokenType) -> Result<IssuedToken, AuthError>;

    /// Verifies signature and expiry, and that the token is of `expected` type.
    fn verify(&self, token: &str, expected: TokenType) -> Result<TokenClaims, AuthError>;
}
