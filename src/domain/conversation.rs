use super::{ConversationId, Message, UserId};
use chrono::{DateTime, Utc};

/// Maximum number of characters carried over from the first message into a title.
pub const TITLE_MAX_CHARS: usize = 50;

#[derive(Debug, Clone)]
pub struct Conversation {
    pub id: ConversationId,
    pub owner_id: UserId,
    pub title: String,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new(owner_id: UserId, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: ConversationId::new(),
            owner_id,
            title,
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Starts a conversation titled after the message that opens it.
    pub fn from_first_message(owner_id: UserId, message: &str) -> Self {
        Self::new(owner_id, derive_title(message))
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

/// First [`TITLE_MAX_CHARS`] characters of the trimmed message.
pub fn derive_title(message: &str) -> String {
    message.trim().chars().take(TITLE_MAX_CHARS).collect()
}
