//! Embeddings implementation of the [`EmbeddingProvider`] trait.

use std::future::Future;

use playbook_types::{EmbeddingError, EmbeddingProvider, EmbeddingRequest, EmbeddingResponse, EmbeddingUsage};

use crate::client::AzureOpenAi;
use crate::error::{map_embedding_http_status, map_embedding_reqwest_error};

impl EmbeddingProvider for AzureOpenAi {
    /// Generate embeddings via the Azure OpenAI embeddings deployment.
    ///
    /// Sends a POST request with the input texts and returns one vector per
    /// input string, in input order.
    fn embed(
        &self,
        request: EmbeddingRequest,
    ) -> impl Future<Output = Result<EmbeddingResponse, EmbeddingError>> + Send {
        let deployment = if request.deployment.is_empty() {
            self.embedding_deployment.clone()
        } else {
            request.deployment.clone()
        };
        let url = self.embeddings_url(&deployment);
        let api_key = self.api_key.clone();
        let http_client = self.client.clone();

        async move {
            if request.input.is_empty() {
                return Err(EmbeddingError::InvalidRequest(
                    "input must contain at least one text".to_string(),
                ));
            }

            let mut body = serde_json::json!({
                "input": request.input,
            });
            if let Some(dims) = request.dimensions {
                body["dimensions"] = serde_json::json!(dims);
            }

            tracing::debug!(
                url = %url,
                inputs = request.input.len(),
                "sending embedding request"
            );

            let response = http_client
                .post(&url)
                .header("api-key", &api_key)
                .header("content-type", "application/json")
                .json(&body)
                .send()
                .await
                .map_err(map_embedding_reqwest_error)?;

            let status = response.status();
            let response_text = response.text().await.map_err(map_embedding_reqwest_error)?;

            if !status.is_success() {
                return Err(map_embedding_http_status(status, &response_text));
            }

            let json: serde_json::Value = serde_json::from_str(&response_text).map_err(|e| {
                EmbeddingError::InvalidRequest(format!("invalid JSON response: {e}"))
            })?;

            parse_embedding_response(&json, &deployment)
        }
    }
}

/// Parse an embeddings API response into an [`EmbeddingResponse`].
///
/// Items are sorted by their `index` field before extraction so the output
/// order matches the input order even if the service returns them shuffled.
fn parse_embedding_response(
    json: &serde_json::Value,
    default_model: &str,
) -> Result<EmbeddingResponse, EmbeddingError> {
    let data = json["data"]
        .as_array()
        .ok_or_else(|| EmbeddingError::InvalidRequest("missing 'data' array".to_string()))?;

    let mut indexed = Vec::with_capacity(data.len());
    for item in data {
        let index = item["index"].as_u64().ok_or_else(|| {
            EmbeddingError::InvalidRequest("missing 'index' in data item".to_string())
        })?;
        let embedding = item["embedding"]
            .as_array()
            .ok_or_else(|| {
                EmbeddingError::InvalidRequest("missing 'embedding' array in data item".to_string())
            })?
            .iter()
            .map(|v| {
                v.as_f64().ok_or_else(|| {
                    EmbeddingError::InvalidRequest("non-numeric value in embedding".to_string())
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;
        indexed.push((index, embedding));
    }
    indexed.sort_by_key(|(index, _)| *index);

    let embeddings = indexed.into_iter().map(|(_, embedding)| embedding).collect();
    let model = json["model"].as_str().unwrap_or(default_model).to_string();

    let usage = &json["usage"];
    let prompt_tokens = usage["prompt_tokens"].as_u64().unwrap_or(0);
    let total_tokens = usage["total_tokens"].as_u64().unwrap_or(0);

    Ok(EmbeddingResponse {
        embeddings,
        model,
        usage: EmbeddingUsage {
            prompt_tokens,
            total_tokens,
        },
    })
}
