use super::*;

#[test]
fn message_serde_round_trip() {
    let msg = Message::new("user", "Hello");
    let json = serde_json::to_string(&msg).unwrap();
    let restored: Message = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.role, "user");
    assert_eq!(restored.content, "Hello");
}

#[test]
fn message_round_trip_preserves_arbitrary_text() {
    for text in ["", "Groq and Llama", "as an AI, I am a Language Model", "line\nbreak \"quoted\""] {
        let msg = Message::new("assistant", text);
        let json = serde_json::to_string(&msg).unwrap();
        let restored: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.content, text);
    }
}

#[test]
fn message_wire_shape_is_role_content() {
    let json = serde_json::to_value(Message::new("system", "hi")).unwrap();
    assert_eq!(json, serde_json::json!({ "role": "system", "content": "hi" }));
}

#[test]
fn missing_api_key_names_the_var() {
    let err = LlmError::MissingApiKey { var: "GROQ_API_KEY".into() };
    assert!(err.to_string().contains("GROQ_API_KEY"));
}

#[test]
fn api_response_display_shows_status_not_body() {
    let err = LlmError::ApiResponse { status: 429, body: "upstream detail".into() };
    let shown = err.to_string();
    assert!(shown.contains("429"));
    assert!(!shown.contains("upstream detail"));
}
