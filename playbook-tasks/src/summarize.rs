//! Text summarization via a prompted single-shot completion.

use playbook_types::{ChatRequest, Message, Provider};

use crate::error::TaskError;

/// Temperature for summarization: low, but with some latitude in phrasing.
const SUMMARIZE_TEMPERATURE: f64 = 0.3;

/// Summarize `text` in at most `max_sentences` sentences.
///
/// One model call, no tools. The deployment comes from the provider's
/// configuration.
pub async fn summarize<P: Provider>(
    provider: &P,
    text: &str,
    max_sentences: usize,
) -> Result<String, TaskError> {
    let system_prompt = format!(
        "You are a skilled summarizer.\n\
         Create a concise summary of the provided text in {max_sentences} sentences or fewer.\n\
         Focus on the key points and main ideas."
    );
    let user_message = format!("Please summarize the following text:\n\n{text}");

    tracing::debug!(chars = text.len(), max_sentences, "summarizing text");

    let request = ChatRequest {
        messages: vec![Message::system(system_prompt), Message::user(user_message)],
        temperature: Some(SUMMARIZE_TEMPERATURE),
        ..Default::default()
    };

    let response = provider.complete(request).await?;
    Ok(response.content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;

    use playbook_types::{ChatResponse, ProviderError, Role, TokenUsage};

    /// Records the last request and replies with a fixed string.
    struct Recording {
        last: Mutex<Option<ChatRequest>>,
    }

    impl Provider for Recording {
        fn complete(
            &self,
            request: ChatRequest,
        ) -> impl Future<Output = Result<ChatResponse, ProviderError>> + Send {
            *self.last.lock().unwrap() = Some(request);
            async {
                Ok(ChatResponse {
                    id: "test".into(),
                    content: "A summary.".into(),
                    model: "test".into(),
                    finish_reason: "stop".into(),
                    usage: TokenUsage::default(),
                })
            }
        }
    }

    #[tokio::test]
    async fn builds_system_and_user_messages() {
        let provider = Recording {
            last: Mutex::new(None),
        };
        let result = summarize(&provider, "Some long text.", 3).await.unwrap();
        assert_eq!(result, "A summary.");

        let request = provider.last.lock().unwrap().take().unwrap();
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert!(request.messages[0].content.contains("3 sentences or fewer"));
        assert_eq!(request.messages[1].role, Role::User);
        assert!(request.messages[1].content.contains("Some long text."));
        assert_eq!(request.temperature, Some(0.3));
    }
}
