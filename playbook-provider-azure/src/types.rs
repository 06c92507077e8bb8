//! Azure OpenAI Chat Completions API request/response types.
//!
//! Reference: <https://learn.microsoft.com/azure/ai-services/openai/reference>

use serde::{Deserialize, Serialize};

use playbook_types::{Message, Role, TokenUsage};

/// Chat Completions API request body.
#[derive(Debug, Serialize)]
pub(crate) struct ApiChatRequest {
    /// Conversation messages.
    pub messages: Vec<ApiMessage>,
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// A message in the Chat Completions API format.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ApiMessage {
    /// Role: "system", "user", or "assistant".
    pub role: String,
    /// Message content.
    pub content: Option<String>,
}

impl From<&Message> for ApiMessage {
    fn from(msg: &Message) -> Self {
        let role = match msg.role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        Self {
            role: role.to_string(),
            content: Some(msg.content.clone()),
        }
    }
}

/// Chat Completions API response body.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiChatResponse {
    /// Unique identifier for the completion.
    pub id: String,
    /// Response choices.
    pub choices: Vec<ApiChoice>,
    /// Model that generated the response.
    pub model: String,
    /// Token usage statistics.
    pub usage: ApiUsage,
}

/// A single choice in the response.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiChoice {
    /// The generated message.
    pub message: ApiMessage,
    /// Why generation stopped.
    pub finish_reason: Option<String>,
}

/// Token usage statistics from the API.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiUsage {
    /// Number of tokens in the prompt.
    pub prompt_tokens: u64,
    /// Number of tokens in the completion.
    #[serde(default)]
    pub completion_tokens: u64,
    /// Total tokens used (prompt + completion).
    pub total_tokens: u64,
}

impl From<ApiUsage> for TokenUsage {
    fn from(usage: ApiUsage) -> Self {
        Self {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_roles_map_to_wire_strings() {
        assert_eq!(ApiMessage::from(&Message::system("s")).role, "system");
        assert_eq!(ApiMessage::from(&Message::user("u")).role, "user");
        assert_eq!(ApiMessage::from(&Message::assistant("a")).role, "assistant");
    }

    #[test]
    fn request_omits_unset_options() {
        let req = ApiChatRequest {
            messages: vec![ApiMessage::from(&Message::user("hi"))],
            temperature: None,
            max_tokens: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("temperature").is_none());
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn request_serializes_options_when_set() {
        let req = ApiChatRequest {
            messages: vec![],
            temperature: Some(0.3),
            max_tokens: Some(1000),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["temperature"], 0.3);
        assert_eq!(json["max_tokens"], 1000);
    }

    #[test]
    fn response_parses_minimal_body() {
        let body = serde_json::json!({
            "id": "chatcmpl-1",
            "model": "gpt-4o",
            "choices": [{
                "message": { "role": "assistant", "content": "hello" },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 5, "completion_tokens": 2, "total_tokens": 7 }
        });
        let resp: ApiChatResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.id, "chatcmpl-1");
        assert_eq!(resp.choices[0].message.content.as_deref(), Some("hello"));
        assert_eq!(TokenUsage::from(resp.usage).total_tokens, 7);
    }
}
