//! Internal helpers for mapping HTTP/reqwest errors to the shared error enums.

use std::time::Duration;

use playbook_types::{EmbeddingError, ProviderError};

/// Map an HTTP status code from the chat endpoint to a [`ProviderError`].
///
/// Azure uses the same status conventions as the upstream OpenAI API; 404
/// additionally covers unknown deployment names.
pub(crate) fn map_http_status(status: reqwest::StatusCode, body: &str) -> ProviderError {
    match status.as_u16() {
        401 | 403 => ProviderError::Authentication(body.to_string()),
        400 => ProviderError::InvalidRequest(body.to_string()),
        404 => ProviderError::DeploymentNotFound(body.to_string()),
        // 429 may include a Retry-After header; we parse from the body as best-effort
        429 => ProviderError::RateLimit {
            retry_after: parse_retry_after(body),
        },
        500 | 502 | 503 => ProviderError::ServiceUnavailable(body.to_string()),
        _ => ProviderError::InvalidRequest(format!("HTTP {status}: {body}")),
    }
}

/// Map an HTTP status code from the embeddings endpoint to an [`EmbeddingError`].
pub(crate) fn map_embedding_http_status(status: reqwest::StatusCode, body: &str) -> EmbeddingError {
    match status.as_u16() {
        401 | 403 => EmbeddingError::Authentication(body.to_string()),
        429 => EmbeddingError::RateLimit {
            retry_after: parse_retry_after(body),
        },
        400 | 404 => EmbeddingError::InvalidRequest(body.to_string()),
        _ => EmbeddingError::Other(body.to_string().into()),
    }
}

/// Attempt to parse a retry delay from an error body.
///
/// The service sometimes includes "Please retry after X seconds" in the
/// error message. Best-effort parse; returns `None` if no delay is found.
fn parse_retry_after(body: &str) -> Option<Duration> {
    let lower = body.to_lowercase();
    if let Some(idx) = lower.find("retry after ") {
        let after = &lower[idx + 12..];
        let num_str: String = after.chars().take_while(|c| c.is_ascii_digit()).collect();
        if let Ok(secs) = num_str.parse::<u64>() {
            return Some(Duration::from_secs(secs));
        }
    }
    None
}

/// Map a [`reqwest::Error`] to a [`ProviderError`].
pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout(Duration::from_secs(30))
    } else {
        ProviderError::Network(Box::new(err))
    }
}

/// Map a [`reqwest::Error`] to an [`EmbeddingError`].
pub(crate) fn map_embedding_reqwest_error(err: reqwest::Error) -> EmbeddingError {
    EmbeddingError::Network(Box::new(err))
}
