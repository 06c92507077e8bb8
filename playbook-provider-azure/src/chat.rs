//! Chat Completions implementation of the [`Provider`] trait.

use std::future::Future;

use playbook_types::{ChatRequest, ChatResponse, Provider, ProviderError};

use crate::client::AzureOpenAi;
use crate::error::{map_http_status, map_reqwest_error};
use crate::types::{ApiChatRequest, ApiChatResponse, ApiMessage};

impl Provider for AzureOpenAi {
    /// Send a chat completion request to the Azure OpenAI deployment.
    ///
    /// Maps the [`ChatRequest`] to the wire format, sends it with the
    /// `api-key` header, and returns the first choice's text content.
    fn complete(
        &self,
        request: ChatRequest,
    ) -> impl Future<Output = Result<ChatResponse, ProviderError>> + Send {
        let deployment = if request.deployment.is_empty() {
            self.deployment.clone()
        } else {
            request.deployment.clone()
        };
        let url = self.chat_url(&deployment);
        let api_key = self.api_key.clone();
        let http_client = self.client.clone();

        async move {
            if deployment.is_empty() {
                return Err(ProviderError::InvalidRequest(
                    "no deployment configured: set one on the client or the request".to_string(),
                ));
            }

            let body = ApiChatRequest {
                messages: request.messages.iter().map(ApiMessage::from).collect(),
                temperature: request.temperature,
                max_tokens: request.max_tokens,
            };

            tracing::debug!(url = %url, deployment = %deployment, "sending chat completion request");

            let response = http_client
                .post(&url)
                .header("api-key", &api_key)
                .header("content-type", "application/json")
                .json(&body)
                .send()
                .await
                .map_err(map_reqwest_error)?;

            let status = response.status();
            let response_text = response.text().await.map_err(map_reqwest_error)?;

            if !status.is_success() {
                return Err(map_http_status(status, &response_text));
            }

            let api_response: ApiChatResponse = serde_json::from_str(&response_text)
                .map_err(|e| ProviderError::InvalidRequest(format!("invalid JSON response: {e}")))?;

            from_api_response(api_response)
        }
    }
}

/// Convert a parsed API response into a [`ChatResponse`].
fn from_api_response(response: ApiChatResponse) -> Result<ChatResponse, ProviderError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::InvalidRequest("response contained no choices".to_string()))?;

    let usage: playbook_types::TokenUsage = response.usage.into();
    tracing::debug!(total_tokens = usage.total_tokens, "received chat completion response");

    Ok(ChatResponse {
        id: response.id,
        content: choice.message.content.unwrap_or_default(),
        model: response.model,
        finish_reason: choice.finish_reason.unwrap_or_default(),
        usage,
    })
}
