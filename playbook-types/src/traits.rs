//! Provider traits for chat completion and embedding backends.
//!
//! Both traits use RPITIT (return-position `impl Trait` in traits) and are
//! intentionally NOT object-safe. Callers stay generic over the provider,
//! as `playbook-tasks` does.

use std::future::Future;

use crate::error::{EmbeddingError, ProviderError};
use crate::types::{ChatRequest, ChatResponse, EmbeddingRequest, EmbeddingResponse};

/// Chat completion provider interface.
///
/// Provider-specific concerns (endpoints, auth headers, wire formats) live
/// entirely in the implementing crate.
pub trait Provider: Send + Sync {
    /// Send a chat completion request and return the model's reply.
    fn complete(
        &self,
        request: ChatRequest,
    ) -> impl Future<Output = Result<ChatResponse, ProviderError>> + Send;
}

/// Embedding provider interface.
///
/// Implementations must return one vector per input text, in input order —
/// callers zip vectors with their source texts positionally.
pub trait EmbeddingProvider: Send + Sync {
    /// Generate embeddings for the request's input texts.
    fn embed(
        &self,
        request: EmbeddingRequest,
    ) -> impl Future<Output = Result<EmbeddingResponse, EmbeddingError>> + Send;
}
