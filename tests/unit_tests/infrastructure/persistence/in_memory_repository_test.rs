use chrono::{Duration, Utc};
use sqlchat::application::ports::{
    ConversationRepository, RepositoryError, RevokedTokenRepository,
};
use sqlchat::domain::{Conversation, Message, UserId};
use sqlchat::infrastructure::persistence::{
    InMemoryConversationRepository, InMemoryRevokedTokenRepository,
};
use uuid::Uuid;

async fn seeded_conversation(repo: &InMemoryConversationRepository, owner: UserId) -> Conversation {
    let conversation = Conversation::from_first_message(owner, "list users");
    repo.create_conversation(&conversation).await.unwrap();
    repo.append_message(owner, &Message::user(conversation.id, "list users"))
        .await
        .unwrap();
    conversation
}

#[tokio::test]
async fn given_foreign_owner_when_reading_messages_then_nothing_is_returned() {
    let repo = InMemoryConversationRepository::new();
    let owner = UserId::new();
    let conversation = seeded_conversation(&repo, owner).await;
    let stranger = UserId::new();

    let recent = repo.get_messages(conversation.id, stranger, 10).await.unwrap();
    let all = repo.list_messages(conversation.id, stranger).await.unwrap();

    assert!(recent.is_empty());
    assert!(all.is_empty());
    assert_eq!(repo.list_messages(conversation.id, owner).await.unwrap().len(), 1);
}

#[tokio::test]
async fn given_foreign_owner_when_appending_message_then_not_found_and_nothing_stored() {
    let repo = InMemoryConversationRepository::new();
    let owner = UserId::new();
    let conversation = seeded_conversation(&repo, owner).await;

    let result = repo
        .append_message(UserId::new(), &Message::user(conversation.id, "drop table users"))
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    let messages = repo.list_messages(conversation.id, owner).await.unwrap();
    assert_eq!(messages.len(), 1);
}

#[tokio::test]
async fn given_limit_when_getting_messages_then_most_recent_are_kept_oldest_first() {
    let repo = InMemoryConversationRepository::new();
    let owner = UserId::new();
    let conversation = seeded_conversation(&repo, owner).await;
    repo.append_message(owner, &Message::assistant(conversation.id, "SELECT * FROM users;"))
        .await
        .unwrap();
    repo.append_message(owner, &Message::user(conversation.id, "only admins"))
        .await
        .unwrap();

    let recent = repo.get_messages(conversation.id, owner, 2).await.unwrap();

    let contents: Vec<&str> = recent.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["SELECT * FROM users;", "only admins"]);
}

#[tokio::test]
async fn given_expired_revocation_when_revoking_another_token_then_expired_entry_is_pruned() {
    let repo = InMemoryRevokedTokenRepository::new();
    let stale = Uuid::new_v4();
    let fresh = Uuid::new_v4();

    repo.revoke(stale, Utc::now() - Duration::minutes(1)).await.unwrap();
    repo.revoke(fresh, Utc::now() + Duration::days(1)).await.unwrap();

    assert!(!repo.is_revoked(stale).await.unwrap());
    assert!(repo.is_revoked(fresh).await.unwrap());
    assert_eq!(repo.revoked_count().await, 1);
}
