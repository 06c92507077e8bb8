//! Chat and embedding request/response types.

use serde::{Deserialize, Serialize};

/// The role of a message participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// A system message that sets the model's behavior.
    System,
    /// A human user.
    User,
    /// An AI assistant.
    Assistant,
}

/// A single conversation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Who produced the message.
    pub role: Role,
    /// Plain-text message content.
    pub content: String,
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A chat completion request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Deployment (model) identifier. Empty means "use the client default".
    pub deployment: String,
    /// Conversation messages, oldest first.
    pub messages: Vec<Message>,
    /// Sampling temperature (0.0 to 2.0).
    pub temperature: Option<f64>,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
}

/// Token usage statistics reported by the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt.
    pub prompt_tokens: u64,
    /// Tokens in the completion.
    pub completion_tokens: u64,
    /// Total tokens used (prompt + completion).
    pub total_tokens: u64,
}

/// A chat completion response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Provider-assigned identifier for the completion.
    pub id: String,
    /// Text content of the first choice.
    pub content: String,
    /// Model that generated the response.
    pub model: String,
    /// Why generation stopped (e.g. "stop", "length").
    pub finish_reason: String,
    /// Token usage for the request.
    pub usage: TokenUsage,
}

/// An embedding request for one or more input texts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    /// Deployment (model) identifier. Empty means "use the client default".
    pub deployment: String,
    /// Input texts to embed. One output vector per input, same order.
    pub input: Vec<String>,
    /// Optional output dimensionality, for models that support it.
    pub dimensions: Option<u32>,
}

impl EmbeddingRequest {
    /// Request an embedding for a single text.
    pub fn single(text: impl Into<String>) -> Self {
        Self {
            input: vec![text.into()],
            ..Default::default()
        }
    }

    /// Request embeddings for a batch of texts in one call.
    pub fn batch<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: texts.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

/// Token usage for an embedding request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingUsage {
    /// Tokens in the input texts.
    pub prompt_tokens: u64,
    /// Total tokens billed.
    pub total_tokens: u64,
}

/// An embedding response.
///
/// `embeddings[i]` is the vector for `input[i]` of the request; providers
/// must preserve input order since callers zip vectors with their source
/// texts positionally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    /// One vector per input text, in input order.
    pub embeddings: Vec<Vec<f64>>,
    /// Model that generated the embeddings.
    pub model: String,
    /// Token usage for the request.
    pub usage: EmbeddingUsage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_constructors_set_role() {
        assert_eq!(Message::system("s").role, Role::System);
        assert_eq!(Message::user("u").role, Role::User);
        assert_eq!(Message::assistant("a").role, Role::Assistant);
    }

    #[test]
    fn chat_request_default_is_empty() {
        let req = ChatRequest::default();
        assert!(req.deployment.is_empty());
        assert!(req.messages.is_empty());
        assert!(req.temperature.is_none());
        assert!(req.max_tokens.is_none());
    }

    #[test]
    fn embedding_request_single() {
        let req = EmbeddingRequest::single("hello");
        assert_eq!(req.input, vec!["hello".to_string()]);
        assert!(req.deployment.is_empty());
    }

    #[test]
    fn embedding_request_batch_preserves_order() {
        let req = EmbeddingRequest::batch(["a", "b", "c"]);
        assert_eq!(req.input, vec!["a", "b", "c"]);
    }

    #[test]
    fn chat_request_round_trips_through_serde() {
        let req = ChatRequest {
            deployment: "gpt-4o".into(),
            messages: vec![Message::user("hi")],
            temperature: Some(0.7),
            max_tokens: Some(1000),
        };
        let json = serde_json::to_string(&req).unwrap();
        let back: ChatRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.deployment, "gpt-4o");
        assert_eq!(back.messages.len(), 1);
        assert_eq!(back.temperature, Some(0.7));
    }
}
