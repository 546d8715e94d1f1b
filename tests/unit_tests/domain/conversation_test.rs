use sqlchat::domain::{Conversation, TITLE_MAX_CHARS, UserId, derive_title};

#[test]
fn given_short_message_when_deriving_title_then_title_equals_message() {
    let message = "select top 5 users by age from users table";
    assert_eq!(derive_title(message), message);
}

#[test]
fn given_long_message_when_deriving_title_then_keeps_first_fifty_chars() {
    let message = "x".repeat(80);
    let title = derive_title(&message);
    assert_eq!(title.chars().count(), TITLE_MAX_CHARS);
    assert_eq!(title, "x".repeat(50));
}

#[test]
fn given_multibyte_message_when_deriving_title_then_counts_characters_not_bytes() {
    let message = "é".repeat(60);
    let title = derive_title(&message);
    assert_eq!(title.chars().count(), 50);
    assert_eq!(title.len(), 100);
}

#[test]
fn given_padded_message_when_deriving_title_then_whitespace_is_trimmed() {
    assert_eq!(derive_title("   count orders  "), "count orders");
}

#[test]
fn given_first_message_when_starting_conversation_then_owner_and_title_are_set() {
    let owner = UserId::new();
    let conversation = Conversation::from_first_message(owner, "list all tables");

    assert_eq!(conversation.owner_id, owner);
    assert_eq!(conversation.title, "list all tables");
    assert!(conversation.messages.is_empty());
    assert_eq!(conversation.created_at, conversation.updated_at);
}

#[test]
fn given_conversation_when_checking_other_user_then_not_owned() {
    let owner = UserId::new();
    let conversation = Conversation::new(owner, "t".to_string());

    assert!(conversation.is_owned_by(owner));
    assert!(!conversation.is_owned_by(UserId::new()));
}
