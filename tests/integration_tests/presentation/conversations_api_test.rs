use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use sqlchat::infrastructure::llm::MockInferenceGateway;

use crate::helpers::test_app::TestApp;

#[tokio::test]
async fn given_chat_turns_when_fetching_detail_then_messages_are_in_order() {
    let app = TestApp::new(Arc::new(MockInferenceGateway));
    let tokens = app.register("alice").await;

    let (_, first) = app
        .chat(&tokens.access, json!({ "message": "count users" }))
        .await;
    let id = first["conversation_id"].as_str().unwrap().to_string();
    app.chat(
        &tokens.access,
        json!({ "message": "only admins", "conversation_id": id }),
    )
    .await;

    let (status, detail) = app
        .send(
            "GET",
            &format!("/api/conversations/{}", id),
            Some(&tokens.access),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let messages = detail["messages"].as_array().unwrap();
    let roles: Vec<&str> = messages
        .iter()
        .map(|m| m["role"].as_str().unwrap())
        .collect();
    assert_eq!(roles, vec!["user", "assistant", "user", "assistant"]);
    assert_eq!(messages[0]["content"], "count users");
    assert_eq!(messages[2]["content"], "only admins");
}

#[tokio::test]
async fn given_empty_body_when_creating_conversation_then_201_with_default_title() {
    let app = TestApp::new(Arc::new(MockInferenceGateway));
    let tokens = app.register("alice").await;

    let (status, body) = app
        .send("POST", "/api/conversations", Some(&tokens.access), None)
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "New conversation");
}

#[tokio::test]
async fn given_title_when_creating_conversation_then_listed_for_owner_only() {
    let app = TestApp::new(Arc::new(MockInferenceGateway));
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;

    let (status, _) = app
        .send(
            "POST",
            "/api/conversations",
            Some(&alice.access),
            Some(json!({ "title": "Quarterly report" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, alice_list) = app
        .send("GET", "/api/conversations", Some(&alice.access), None)
        .await;
    let (_, bob_list) = app
        .send("GET", "/api/conversations", Some(&bob.access), None)
        .await;

    assert_eq!(alice_list.as_array().unwrap().len(), 1);
    assert_eq!(alice_list[0]["title"], "Quarterly report");
    assert!(bob_list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn given_foreign_or_malformed_id_when_fetching_detail_then_404() {
    let app = TestApp::new(Arc::new(MockInferenceGateway));
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;

    let (_, created) = app
        .send("POST", "/api/conversations", Some(&alice.access), None)
        .await;
    let id = created["id"].as_str().unwrap();

    let (foreign, _) = app
        .send(
            "GET",
            &format!("/api/conversations/{}", id),
            Some(&bob.access),
            None,
        )
        .await;
    let (malformed, _) = app
        .send(
            "GET",
            "/api/conversations/not-a-uuid",
            Some(&alice.access),
            None,
        )
        .await;

    assert_eq!(foreign, StatusCode::NOT_FOUND);
    assert_eq!(malformed, StatusCode::NOT_FOUND);
}
