//! Error types for similarity and ranking operations.

/// Errors from similarity computation and top-k ranking.
///
/// All variants indicate a caller programming error or malformed embedding
/// data, never a transient condition; nothing here is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankError {
    /// Two vectors of unequal length were compared.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch {
        /// Length of the first vector.
        left: usize,
        /// Length of the second vector.
        right: usize,
    },
    /// A zero-norm vector was used in a similarity computation.
    ///
    /// A zero vector carries no directional information, so its cosine
    /// similarity to anything is undefined.
    #[error("degenerate vector: zero norm")]
    DegenerateVector,
    /// An argument was outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        assert_eq!(
            RankError::DimensionMismatch { left: 3, right: 2 }.to_string(),
            "dimension mismatch: 3 vs 2"
        );
        assert_eq!(
            RankError::DegenerateVector.to_string(),
            "degenerate vector: zero norm"
        );
        assert_eq!(
            RankError::InvalidArgument("top_k must be >= 0, got -1".into()).to_string(),
            "invalid argument: top_k must be >= 0, got -1"
        );
    }
}
