//! Top-k similarity search over (document, vector) candidates.

use crate::error::RankError;
use crate::similarity::cosine_similarity;

/// A document paired with its similarity score to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMatch<D> {
    /// The opaque document handle, carried through unchanged.
    pub document: D,
    /// Cosine similarity to the query, in `[-1, 1]`.
    pub score: f64,
}

/// Return the `top_k` candidates most similar to `query`, best first.
///
/// Ties keep their original input order (stable sort). `top_k` larger than
/// the candidate count returns all candidates; an empty candidate set or
/// `top_k == 0` returns an empty vector.
///
/// # Errors
///
/// - [`RankError::InvalidArgument`] if `top_k` is negative.
/// - Any [`cosine_similarity`] failure (dimension mismatch, zero-norm
///   vector) aborts the whole call. Partial rankings are never returned —
///   a silently truncated result would mislead downstream consumers.
pub fn top_k_search<D: Clone>(
    query: &[f64],
    candidates: &[(D, Vec<f64>)],
    top_k: i64,
) -> Result<Vec<ScoredMatch<D>>, RankError> {
    if top_k < 0 {
        return Err(RankError::InvalidArgument(format!(
            "top_k must be >= 0, got {top_k}"
        )));
    }

    // Score everything before sorting so a failure can abort the whole
    // call with no partial result.
    let mut scored = Vec::with_capacity(candidates.len());
    for (document, vector) in candidates {
        let score = cosine_similarity(query, vector)?;
        scored.push(ScoredMatch {
            document: document.clone(),
            score,
        });
    }

    // Stable sort: equal scores keep input order. Scores are always
    // finite here because degenerate inputs were rejected above.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(top_k as usize);

    Ok(scored)
}
