mod auth_error;
mod conversation_repository;
mod credential_hasher;
mod inference_gateway;
mod mailer;
mod repository_error;
mod revoked_token_repository;
mod token_issuer;
mod user_repository;

pub use auth_error::AuthError;
pub use conversation_repository::ConversationRepository;
pub use credential_hasher::CredentialHasher;
pub use inference_gateway::{GatewayError, InferenceGateway};
pub use mailer::{MailError, Mailer, OutgoingEmail};
pub use repository_error::RepositoryError;
pub use revoked_token_repository::RevokedTokenRepository;
pub use token_issuer::{IssuedToken, TokenClaims, TokenIssuer, TokenType};
pub use user_repository::UserRepository;
