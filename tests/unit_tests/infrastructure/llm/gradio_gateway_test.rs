use sqlchat::application::ports::GatewayError;
use sqlchat::infrastructure::llm::parse_completion_event;

#[test]
fn given_complete_event_when_parsing_then_returns_trimmed_first_output() {
    let body = "event: generating\ndata: [\"SEL\"]\n\nevent: complete\ndata: [\"  SELECT * FROM users;\\n\"]\n\n";

    let reply = parse_completion_event(body).unwrap();

    assert_eq!(reply, "SELECT * FROM users;");
}

#[test]
fn given_error_event_when_parsing_then_upstream_error() {
    let body = "event: error\ndata: null\n\n";

    let result = parse_completion_event(body);

    assert!(matches!(result, Err(GatewayError::Upstream(_))));
}

#[test]
fn given_error_event_with_message_when_parsing_then_message_is_kept() {
    let body = "event: error\ndata: \"GPU quota exceeded\"\n\n";

    match parse_completion_event(body) {
        Err(GatewayError::Upstream(message)) => assert!(message.contains("GPU quota exceeded")),
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[test]
fn given_stream_without_result_when_parsing_then_malformed_response() {
    let body = "event: heartbeat\ndata: null\n\n";

    let result = parse_completion_event(body);

    assert!(matches!(result, Err(GatewayError::MalformedResponse(_))));
}

#[test]
fn given_complete_event_with_invalid_json_when_parsing_then_malformed_response() {
    let body = "event: complete\ndata: not json\n\n";

    let result = parse_completion_event(body);

    assert!(matches!(result, Err(GatewayError::MalformedResponse(_))));
}

#[test]
fn given_complete_event_with_empty_output_when_parsing_then_malformed_response() {
    let body = "event: complete\ndata: [\"   \"]\n\n";

    let result = parse_completion_event(body);

    assert!(matches!(result, Err(GatewayError::MalformedResponse(_))));
}
