mod conversation;
mod conversation_id;
mod message;
mod message_id;
mod message_role;
mod user;
mod user_id;

pub use conversation::{Conversation, TITLE_MAX_CHARS, derive_title};
pub use conversation_id::ConversationId;
pub use message::Message;
pub use message_id::MessageId;
pub use message_role::MessageRole;
pub use user::User;
pub use user_id::UserId;
