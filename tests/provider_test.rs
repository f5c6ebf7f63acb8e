// Wire-level tests for the generation providers against a mock HTTP server

use mindwell::config::ProviderSettings;
use mindwell::providers::{
    claude::ClaudeProvider, create_provider, gemini::GeminiProvider, ChatTurn, GenerationRequest,
    LlmProvider,
};
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_gemini_sends_history_and_system_instruction() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::PartialJson(json!({
            "systemInstruction": { "parts": [{ "text": "be gentle" }] },
            "contents": [
                { "role": "user", "parts": [{ "text": "I have exams" }] },
                { "role": "model", "parts": [{ "text": "How are you feeling?" }] },
                { "role": "user", "parts": [{ "text": "tired" }] }
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "candidates": [{
                    "content": { "role": "model", "parts": [{ "text": "That sounds " }, { "text": "draining." }] },
                    "finishReason": "STOP"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let provider = GeminiProvider::new("test-key".to_string())
        .unwrap()
        .with_base_url(server.url());
    let request = GenerationRequest::from_history(vec![
        ChatTurn::user("I have exams"),
        ChatTurn::model("How are you feeling?"),
        ChatTurn::user("tired"),
    ])
    .with_system_instruction("be gentle");

    let response = provider.generate(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.text, "That sounds draining.");
    assert_eq!(response.provider, "gemini");
    assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
}

#[tokio::test]
async fn test_gemini_error_status_is_surfaced() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .with_status(403)
        .with_body(r#"{"error":{"message":"API key not valid"}}"#)
        .expect(1)
        .create_async()
        .await;

    let provider = GeminiProvider::new("bad-key".to_string())
        .unwrap()
        .with_base_url(server.url());

    let err = provider
        .generate(&GenerationRequest::from_prompt("hi"))
        .await
        .unwrap_err();

    // Exactly one call: failures are not retried
    mock.assert_async().await;
    let message = format!("{:#}", err);
    assert!(message.contains("403"));
    assert!(message.contains("API key not valid"));
}

#[tokio::test]
async fn test_gemini_blocked_prompt() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .with_status(200)
        .with_body(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
        .create_async()
        .await;

    let provider = GeminiProvider::new("k".to_string())
        .unwrap()
        .with_base_url(server.url());

    let err = provider
        .generate(&GenerationRequest::from_prompt("hi"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("SAFETY"));
}

#[tokio::test]
async fn test_gemini_request_model_overrides_default() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-1.5-pro:generateContent")
        .with_status(200)
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#)
        .create_async()
        .await;

    let provider = GeminiProvider::new("k".to_string())
        .unwrap()
        .with_base_url(server.url());

    let response = provider
        .generate(&GenerationRequest::from_prompt("hi").with_model("gemini-1.5-pro"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.model, "gemini-1.5-pro");
}

#[tokio::test]
async fn test_claude_maps_roles_and_system() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/messages")
        .match_header("x-api-key", "test-key")
        .match_header("anthropic-version", "2023-06-01")
        .match_body(Matcher::PartialJson(json!({
            "system": "be gentle",
            "messages": [
                { "role": "user", "content": "hi" },
                { "role": "assistant", "content": "hello" },
                { "role": "user", "content": "exams" }
            ]
        })))
        .with_status(200)
        .with_body(
            json!({
                "id": "msg_1",
                "type": "message",
                "role": "assistant",
                "model": "claude-sonnet-4-20250514",
                "content": [{ "type": "text", "text": "Tell me more." }],
                "stop_reason": "end_turn"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let provider = ClaudeProvider::new("test-key".to_string())
        .unwrap()
        .with_base_url(server.url());
    let request = GenerationRequest::from_history(vec![
        ChatTurn::user("hi"),
        ChatTurn::model("hello"),
        ChatTurn::user("exams"),
    ])
    .with_system_instruction("be gentle");

    let response = provider.generate(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.text, "Tell me more.");
    assert_eq!(response.finish_reason.as_deref(), Some("end_turn"));
}

#[tokio::test]
async fn test_factory_applies_base_url_and_model() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/custom-model:generateContent")
        .with_status(200)
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#)
        .create_async()
        .await;

    let mut settings = ProviderSettings::new("gemini", "k");
    settings.model = Some("custom-model".to_string());
    settings.base_url = Some(server.url());
    settings.request_timeout_secs = 5;

    let provider = create_provider(&settings).unwrap();
    let response = provider
        .generate(&GenerationRequest::from_prompt("hi"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.text, "ok");
}
