use std::sync::Arc;

use sqlchat::application::ports::ConversationRepository;
use sqlchat::application::services::{
    ChatError, ChatService, ChatTurn, HistoryPolicy, build_prompt, fallback_response,
};
use sqlchat::domain::{ConversationId, Message, MessageRole, UserId};
use sqlchat::infrastructure::llm::{
    FailingInferenceGateway, MockInferenceGateway, RecordingInferenceGateway,
};
use sqlchat::infrastructure::persistence::InMemoryConversationRepository;

fn service_with(
    repo: Arc<InMemoryConversationRepository>,
    gateway: Arc<dyn sqlchat::application::ports::InferenceGateway>,
    history: HistoryPolicy,
) -> ChatService {
    ChatService::new(repo, gateway, history)
}

fn turn(message: &str, conversation_id: Option<ConversationId>) -> ChatTurn {
    ChatTurn {
        message: message.to_string(),
        conversation_id,
    }
}

#[tokio::test]
async fn given_new_message_when_handling_turn_then_creates_one_conversation_with_two_messages() {
    let repo = Arc::new(InMemoryConversationRepository::new());
    let service = service_with(
        repo.clone(),
        Arc::new(MockInferenceGateway),
        HistoryPolicy::default(),
    );
    let owner = UserId::new();

    let reply = service
        .handle_turn(owner, turn("list all tables", None))
        .await
        .unwrap();

    assert_eq!(repo.conversation_count().await, 1);
    assert_eq!(repo.message_count().await, 2);

    let messages = repo.get_messages(reply.conversation_id, owner, 10).await.unwrap();
    assert_eq!(messages[0].role, MessageRole::User);
    assert_eq!(messages[0].content, "list all tables");
    assert_eq!(messages[1].role, MessageRole::Assistant);
    assert_eq!(messages[1].content, reply.response);
}

#[tokio::test]
async fn given_whitespace_message_when_handling_turn_then_rejects_without_side_effects() {
    let repo = Arc::new(InMemoryConversationRepository::new());
    let service = service_with(
        repo.clone(),
        Arc::new(MockInferenceGateway),
        HistoryPolicy::default(),
    );

    let result = service.handle_turn(UserId::new(), turn("   \n\t", None)).await;

    assert!(matches!(result, Err(ChatError::EmptyMessage)));
    assert_eq!(repo.conversation_count().await, 0);
    assert_eq!(repo.message_count().await, 0);
}

#[tokio::test]
async fn given_foreign_conversation_when_handling_turn_then_same_error_as_unknown_id() {
    let repo = Arc::new(InMemoryConversationRepository::new());
    let service = service_with(
        repo.clone(),
        Arc::new(MockInferenceGateway),
        HistoryPolicy::default(),
    );
    let alice = UserId::new();
    let bob = UserId::new();

    let first = service
        .handle_turn(alice, turn("alice's question", None))
        .await
        .unwrap();

    let foreign = service
        .handle_turn(bob, turn("peek", Some(first.conversation_id)))
        .await;
    let unknown = service
        .handle_turn(bob, turn("peek", Some(ConversationId::new())))
        .await;

    assert!(matches!(foreign, Err(ChatError::NotFoundOrForbidden)));
    assert!(matches!(unknown, Err(ChatError::NotFoundOrForbidden)));
    assert_eq!(repo.message_count().await, 2);
}

#[tokio::test]
async fn given_failing_gateway_when_handling_turn_then_responds_with_fallback() {
    let repo = Arc::new(InMemoryConversationRepository::new());
    let service = service_with(
        repo.clone(),
        Arc::new(FailingInferenceGateway),
        HistoryPolicy::default(),
    );

    let reply = service
        .handle_turn(UserId::new(), turn("count orders per day", None))
        .await
        .unwrap();

    assert_eq!(reply.response, fallback_response("count orders per day"));
    assert_eq!(repo.message_count().await, 2);
}

#[tokio::test]
async fn given_two_turns_on_one_conversation_when_handled_then_four_messages_in_order() {
    let repo = Arc::new(InMemoryConversationRepository::new());
    let service = service_with(
        repo.clone(),
        Arc::new(MockInferenceGateway),
        HistoryPolicy::default(),
    );
    let owner = UserId::new();

    let first = service
        .handle_turn(owner, turn("first question", None))
        .await
        .unwrap();
    let after_first = repo.list_for_owner(owner).await.unwrap()[0].updated_at;

    let second = service
        .handle_turn(owner, turn("second question", Some(first.conversation_id)))
        .await
        .unwrap();
    let after_second = repo.list_for_owner(owner).await.unwrap()[0].updated_at;

    assert_eq!(first.conversation_id, second.conversation_id);
    assert_eq!(second.title, "first question");
    assert!(after_second >= after_first);

    let contents: Vec<(MessageRole, String)> = repo
        .get_messages(first.conversation_id, owner, 10)
        .await
        .unwrap()
        .into_iter()
        .map(|m| (m.role, m.content))
        .collect();
    assert_eq!(contents.len(), 4);
    assert_eq!(contents[0], (MessageRole::User, "first question".to_string()));
    assert_eq!(contents[1].0, MessageRole::Assistant);
    assert_eq!(contents[2], (MessageRole::User, "second question".to_string()));
    assert_eq!(contents[3].0, MessageRole::Assistant);
}

#[tokio::test]
async fn given_sql_request_and_no_model_when_handling_turn_then_fallback_quotes_request() {
    let repo = Arc::new(InMemoryConversationRepository::new());
    let service = service_with(
        repo,
        Arc::new(FailingInferenceGateway),
        HistoryPolicy::default(),
    );
    let message = "select top 5 users by age from users table";

    let reply = service
        .handle_turn(UserId::new(), turn(message, None))
        .await
        .unwrap();

    assert!(reply.response.contains(message));
    assert_eq!(reply.title, message);
}

#[tokio::test]
async fn given_long_first_message_when_handling_turn_then_title_is_truncated() {
    let repo = Arc::new(InMemoryConversationRepository::new());
    let service = service_with(
        repo,
        Arc::new(MockInferenceGateway),
        HistoryPolicy::default(),
    );
    let message = "a".repeat(120);

    let reply = service
        .handle_turn(UserId::new(), turn(&message, None))
        .await
        .unwrap();

    assert_eq!(reply.title.chars().count(), 50);
}

#[tokio::test]
async fn given_history_disabled_when_handling_turn_then_prompt_is_the_message_as_sent() {
    let repo = Arc::new(InMemoryConversationRepository::new());
    let gateway = Arc::new(RecordingInferenceGateway::new("SELECT 1;"));
    let service = service_with(repo, gateway.clone(), HistoryPolicy::default());
    let owner = UserId::new();

    let first = service
        .handle_turn(owner, turn("  first  ", None))
        .await
        .unwrap();
    service
        .handle_turn(owner, turn("second", Some(first.conversation_id)))
        .await
        .unwrap();

    assert_eq!(gateway.prompts(), vec!["  first  ".to_string(), "second".to_string()]);
}

#[tokio::test]
async fn given_history_enabled_when_handling_follow_up_then_prompt_replays_prior_turns() {
    let repo = Arc::new(InMemoryConversationRepository::new());
    let gateway = Arc::new(RecordingInferenceGateway::new("SELECT 1;"));
    let service = service_with(
        repo,
        gateway.clone(),
        HistoryPolicy {
            include: true,
            limit: 10,
        },
    );
    let owner = UserId::new();

    let first = service
        .handle_turn(owner, turn("show users", None))
        .await
        .unwrap();
    service
        .handle_turn(owner, turn("only active ones", Some(first.conversation_id)))
        .await
        .unwrap();

    let prompts = gateway.prompts();
    assert_eq!(
        prompts[1],
        "User: show users\nAssistant: SELECT 1;\nUser: only active ones"
    );
}

#[test]
fn given_no_history_when_building_prompt_then_returns_message_unchanged() {
    assert_eq!(build_prompt(&[], "hello"), "hello");
}

#[test]
fn given_history_when_building_prompt_then_each_entry_is_prefixed_by_role() {
    let id = ConversationId::new();
    let history = vec![Message::user(id, "q1"), Message::assistant(id, "a1")];

    assert_eq!(build_prompt(&history, "q2"), "User: q1\nAssistant: a1\nUser: q2");
}

#[tokio::test]
async fn given_padded_message_and_failing_gateway_when_handling_turn_then_original_text_is_kept() {
    let repo = Arc::new(InMemoryConversationRepository::new());
    let service = service_with(
        repo.clone(),
        Arc::new(FailingInferenceGateway),
        HistoryPolicy::default(),
    );
    let owner = UserId::new();
    let message = "  list users\n";

    let reply = service.handle_turn(owner, turn(message, None)).await.unwrap();

    assert_eq!(reply.response, fallback_response(message));
    assert_eq!(reply.title, "list users");

    let stored = repo
        .get_messages(reply.conversation_id, owner, 10)
        .await
        .unwrap();
    assert_eq!(stored[0].content, message);
}
