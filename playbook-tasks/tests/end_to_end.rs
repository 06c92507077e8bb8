//! End-to-end tests: task flows driving the Azure provider against wiremock.

use playbook_provider_azure::AzureOpenAi;
use playbook_tasks::{classify, semantic_search, summarize};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 20, "completion_tokens": 8, "total_tokens": 28 }
    })
}

#[tokio::test]
async fn summarize_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/deployments/gpt-4o/chat/completions"))
        .and(body_partial_json(serde_json::json!({ "temperature": 0.3 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body("Short summary.")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AzureOpenAi::new(mock_server.uri(), "key").deployment("gpt-4o");
    let summary = summarize(&client, "A long text about prompt engineering.", 3)
        .await
        .unwrap();
    assert_eq!(summary, "Short summary.");
}

#[tokio::test]
async fn classify_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/deployments/gpt-4o/chat/completions"))
        .and(body_partial_json(serde_json::json!({ "temperature": 0.0 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body("Technical")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AzureOpenAi::new(mock_server.uri(), "key").deployment("gpt-4o");
    let categories = vec!["Technical".to_string(), "Creative".to_string()];
    let category = classify(&client, "How do I configure endpoints?", &categories)
        .await
        .unwrap();
    assert_eq!(category, "Technical");
}

#[tokio::test]
async fn semantic_search_embeds_and_ranks() {
    let mock_server = MockServer::start().await;
    let documents = vec![
        "Retrieval augmented generation".to_string(),
        "Weekend weather forecast".to_string(),
    ];

    // Batch call for the two documents.
    Mock::given(method("POST"))
        .and(path("/openai/deployments/text-embedding-ada-002/embeddings"))
        .and(body_partial_json(serde_json::json!({
            "input": ["Retrieval augmented generation", "Weekend weather forecast"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                { "embedding": [0.9, 0.1], "index": 0 },
                { "embedding": [0.1, 0.9], "index": 1 }
            ],
            "model": "text-embedding-ada-002",
            "usage": { "prompt_tokens": 8, "total_tokens": 8 }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Single call for the query.
    Mock::given(method("POST"))
        .and(path("/openai/deployments/text-embedding-ada-002/embeddings"))
        .and(body_partial_json(serde_json::json!({
            "input": ["How does retrieval help AI?"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{ "embedding": [1.0, 0.0], "index": 0 }],
            "model": "text-embedding-ada-002",
            "usage": { "prompt_tokens": 6, "total_tokens": 6 }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AzureOpenAi::new(mock_server.uri(), "key");
    let hits = semantic_search(&client, "How does retrieval help AI?", &documents, 1)
        .await
        .unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].document, "Retrieval augmented generation");
    assert!(hits[0].score > 0.9);
}
