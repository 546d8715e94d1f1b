use std::sync::Arc;

use chrono::Duration;

use crate::application::ports::{ConversationRepository, InferenceGateway};
use crate::application::services::{
    AuthService, ChatService, ConversationService, HistoryPolicy,
};
use crate::infrastructure::auth::{Argon2CredentialHasher, JwtTokenIssuer};
use crate::infrastructure::mail::LogMailer;
use crate::infrastructure::persistence::RepositorySet;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub conversation_service: Arc<ConversationService>,
    pub auth_service: Arc<AuthService>,
    pub conversation_repository: Arc<dyn ConversationRepository>,
    pub inference_gateway: Arc<dyn InferenceGateway>,
}

impl AppState {
    /// Wires services over already-constructed storage and gateway.
    pub fn new(
        settings: &Settings,
        repositories: RepositorySet,
        inference_gateway: Arc<dyn InferenceGateway>,
    ) -> Self {
        let history = HistoryPolicy {
            include: settings.inference.include_history,
            limit: settings.inference.history_limit,
        };

        let chat_service = Arc::new(ChatService::new(
            Arc::clone(&repositories.conversations),
            Arc::clone(&inference_gateway),
            history,
        ));
        let conversation_service = Arc::new(ConversationService::new(Arc::clone(
            &repositories.conversations,
        )));

        let token_issuer = Arc::new(JwtTokenIssuer::new(
            &settings.auth.jwt_secret,
            Duration::minutes(settings.auth.access_token_ttl_minutes),
            Duration::days(settings.auth.refresh_token_ttl_days),
        ));
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&repositories.users),
            Arc::clone(&repositories.revoked_tokens),
            Arc::new(Argon2CredentialHasher::new()),
            token_issuer,
            Arc::new(LogMailer::new(settings.mail.from_address.clone())),
        ));

        Self {
            chat_service,
            conversation_service,
            auth_service,
            conversation_repository: repositories.conversations,
            inference_gateway,
        }
    }
}
