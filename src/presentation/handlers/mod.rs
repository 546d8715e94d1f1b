mod auth;
mod chat;
mod conversations;
mod error;
mod health;

pub use auth::{
    login_handler, logout_handler, profile_handler, refresh_handler, register_handler,
};
pub use chat::chat_handler;
pub use conversations::{
    conversation_detail_handler, create_conversation_handler, list_conversations_handler,
};
pub use error::{
    ApiError, CHAT_FAILURE_MESSAGE, ErrorResponse, INTERNAL_FAILURE_MESSAGE, NOT_FOUND_MESSAGE,
};
pub use health::{health_handler, readiness_handler};
