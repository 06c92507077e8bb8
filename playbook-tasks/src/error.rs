//! Error type for task flows.

use playbook_rank::RankError;
use playbook_types::{EmbeddingError, ProviderError};

/// Errors from the task flows.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// The chat completion call failed.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
    /// An embedding call failed.
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),
    /// Similarity ranking failed.
    #[error("ranking error: {0}")]
    Rank(#[from] RankError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_rank_errors() {
        let err = TaskError::from(RankError::DegenerateVector);
        assert_eq!(err.to_string(), "ranking error: degenerate vector: zero norm");
    }

    #[test]
    fn wraps_provider_errors() {
        let err = TaskError::from(ProviderError::InvalidRequest("bad".into()));
        assert_eq!(err.to_string(), "provider error: invalid request: bad");
    }
}
