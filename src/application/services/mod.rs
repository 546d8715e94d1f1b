mod auth_service;
mod chat_service;
mod conversation_service;
mod fallback_responder;

pub use auth_service::{
    AuthService, AuthSession, Identity, Registration, TokenPair, WELCOME_EMAIL_SUBJECT,
};
pub use chat_service::{ChatError, ChatReply, ChatService, ChatTurn, HistoryPolicy, build_prompt};
pub use conversation_service::{
    ConversationError, ConversationService, DEFAULT_CONVERSATION_TITLE,
};
pub use fallback_responder::fallback_response;
