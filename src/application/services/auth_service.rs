use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::application::ports::{
    AuthError, CredentialHasher, Mailer, OutgoingEmail, RepositoryError, RevokedTokenRepository,
    TokenClaims, TokenIssuer, TokenType, UserRepository,
};
use crate::domain::{User, UserId};

const MIN_PASSWORD_CHARS: usize = 8;

pub const WELCOME_EMAIL_SUBJECT: &str = "Welcome to SQL Chat";

#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub tokens: TokenPair,
}

/// Caller identity resolved from a verified access token.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: UserId,
    pub username: String,
}

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    revoked_tokens: Arc<dyn RevokedTokenRepository>,
    hasher: Arc<dyn CredentialHasher>,
    tokens: Arc<dyn TokenIssuer>,
    mailer: Arc<dyn Mailer>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        revoked_tokens: Arc<dyn RevokedTokenRepository>,
        hasher: Arc<dyn CredentialHasher>,
        tokens: Arc<dyn TokenIssuer>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            users,
            revoked_tokens,
            hasher,
            tokens,
            mailer,
        }
    }

    #[tracing::instrument(skip(self, registration), fields(username = %registration.username))]
    pub async fn register(&self, registration: Registration) -> Result<AuthSession, AuthError> {
        let username = registration.username.trim().to_string();
        let email = registration
            .email
            .map(|e| e.trim().to_string())
            .unwrap_or_default();

        if username.is_empty() {
            return Err(AuthError::Validation("username is required".to_string()));
        }
        if registration.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(AuthError::Validation(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_CHARS
            )));
        }
        if self.users.find_by_username(&username).await?.is_some() {
            return Err(AuthError::Conflict(
                "This username is already registered.".to_string(),
            ));
        }
        if !email.is_empty() && self.users.email_taken(&email).await? {
            return Err(AuthError::Conflict(
                "This email address is already registered.".to_string(),
            ));
        }

        let password_hash = self.hasher.hash(&registration.password)?;
        let user = User::new(username, email, password_hash);

        // A concurrent registration can still win the unique index.
        self.users.create(&user).await.map_err(|e| match e {
            RepositoryError::ConstraintViolation(_) => {
                AuthError::Conflict("This username is already registered.".to_string())
            }
            other => AuthError::Repository(other),
        })?;

        tracing::info!(user_id = %user.id, "User registered");
        self.send_welcome(&user).await;

        let tokens = self.issue_pair(&user)?;
        Ok(AuthSession { user, tokens })
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthSession, AuthError> {
        let user = self
            .users
            .find_by_username(username.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.hasher.verify(password, &user.password_hash)? {
            tracing::warn!(user_id = %user.id, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let tokens = self.issue_pair(&user)?;
        Ok(AuthSession { user, tokens })
    }

    /// Exchanges a live refresh token for a new access token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, AuthError> {
        let claims = self.live_refresh_claims(refresh_token).await?;
        let user = self
            .users
            .find_by_id(UserId::from_uuid(claims.sub))
            .await?
            .ok_or(AuthError::UnknownUser)?;

        Ok(self.tokens.issue(&user, TokenType::Access)?.token)
    }

    /// Revokes the refresh token so it can no longer mint access tokens.
    pub async fn logout(&self, refresh_token: Option<&str>) -> Result<(), AuthError> {
        let Some(token) = refresh_token else {
            return Ok(());
        };

        let claims = self.tokens.verify(token, TokenType::Refresh)?;
        let expires_at = Utc
            .timestamp_opt(claims.exp, 0)
            .single()
            .unwrap_or_else(Utc::now);
        self.revoked_tokens.revoke(claims.jti, expires_at).await?;
        tracing::info!(user_id = %claims.sub, "Refresh token revoked");
        Ok(())
    }

    pub fn authenticate(&self, access_token: &str) -> Result<Identity, AuthError> {
        let claims = self.tokens.verify(access_token, TokenType::Access)?;
        Ok(Identity {
            user_id: UserId::from_uuid(claims.sub),
            username: claims.username,
        })
    }

    pub async fn profile(&self, user_id: UserId) -> Result<User, AuthError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UnknownUser)
    }

    /// Best effort: a delivery failure never fails the registration.
    async fn send_welcome(&self, user: &User) {
        if user.email.is_empty() {
            return;
        }
        let email = OutgoingEmail {
            to: user.email.clone(),
            subject: WELCOME_EMAIL_SUBJECT.to_string(),
            body: format!("Hi {},\n\nWelcome to SQL Chat!", user.username),
        };
        if let Err(e) = self.mailer.send(email).await {
            tracing::warn!(user_id = %user.id, error = %e, "Welcome email not sent");
        }
    }

    async fn live_refresh_claims(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let claims = self.tokens.verify(token, TokenType::Refresh)?;
        if self.revoked_tokens.is_revoked(claims.jti).await? {
            return Err(AuthError::TokenRevoked);
        }
        Ok(claims)
    }

    fn issue_pair(&self, user: &User) -> Result<TokenPair, AuthError> {
        Ok(TokenPair {
            access: self.tokens.issue(user, TokenType::Access)?.token,
            refresh: self.tokens.issue(user, TokenType::Refresh)?.token,
        })
    }
}
