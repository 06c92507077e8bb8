//! Text classification via a prompted single-shot completion.

use playbook_types::{ChatRequest, Message, Provider};

use crate::error::TaskError;

/// Classify `text` into exactly one of `categories`.
///
/// Temperature 0 so the model picks deterministically. The reply is the
/// category name as the model produced it; callers compare it against
/// their category list.
pub async fn classify<P: Provider>(
    provider: &P,
    text: &str,
    categories: &[String],
) -> Result<String, TaskError> {
    let categories_str = categories.join(", ");
    let system_prompt = format!(
        "You are a text classifier.\n\
         Classify the given text into exactly one of these categories: {categories_str}\n\
         Respond with only the category name, nothing else."
    );
    let user_message = format!("Classify this text:\n\n{text}");

    tracing::debug!(categories = categories.len(), "classifying text");

    let request = ChatRequest {
        messages: vec![Message::system(system_prompt), Message::user(user_message)],
        temperature: Some(0.0),
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

    use playbook_types::{ChatResponse, ProviderError, TokenUsage};

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
                    content: "Technical".into(),
                    model: "test".into(),
                    finish_reason: "stop".into(),
                    usage: TokenUsage::default(),
                })
            }
        }
    }

    #[tokio::test]
    async fn lists_categories_in_system_prompt() {
        let provider = Recording {
            last: Mutex::new(None),
        };
        let categories = vec!["Technical".to_string(), "Business".to_string()];
        let result = classify(&provider, "How do I configure endpoints?", &categories)
            .await
            .unwrap();
        assert_eq!(result, "Technical");

        let request = provider.last.lock().unwrap().take().unwrap();
        assert!(request.messages[0].content.contains("Technical, Business"));
        assert_eq!(request.temperature, Some(0.0));
    }
}
