//! Semantic search: embed a document set and a query, then rank.

use playbook_rank::top_k_search;
use playbook_types::{EmbeddingProvider, EmbeddingRequest};

use crate::error::TaskError;

/// A document with its similarity score to the query, best-first.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    /// The document text, carried through unchanged.
    pub document: String,
    /// Cosine similarity to the query, in `[-1, 1]`.
    pub score: f64,
}

/// Find the `top_k` documents most similar to `query`.
///
/// Embeds all documents in one batch call and the query in a second call,
/// zips documents with their vectors positionally (the provider preserves
/// input order), and ranks with cosine similarity. Ties keep document
/// order; `top_k` larger than the document count returns everything.
///
/// An empty document set returns an empty result without calling the
/// provider.
pub async fn semantic_search<E: EmbeddingProvider>(
    provider: &E,
    query: &str,
    documents: &[String],
    top_k: usize,
) -> Result<Vec<SearchHit>, TaskError> {
    if documents.is_empty() {
        return Ok(Vec::new());
    }

    tracing::debug!(documents = documents.len(), top_k, "running semantic search");

    let document_response = provider
        .embed(EmbeddingRequest::batch(documents.iter().cloned()))
        .await?;
    let query_response = provider.embed(EmbeddingRequest::single(query)).await?;

    let candidates: Vec<(String, Vec<f64>)> = documents
        .iter()
        .cloned()
        .zip(document_response.embeddings)
        .collect();
    let query_vector = query_response
        .embeddings
        .into_iter()
        .next()
        .unwrap_or_default();

    let ranked = top_k_search(
        &query_vector,
        &candidates,
        i64::try_from(top_k).unwrap_or(i64::MAX),
    )?;

    Ok(ranked
        .into_iter()
        .map(|hit| SearchHit {
            document: hit.document,
            score: hit.score,
        })
        .collect())
}
