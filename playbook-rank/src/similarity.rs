//! Cosine similarity over `f64` embedding vectors.

use crate::error::RankError;

/// Dot product of two equal-length vectors.
///
/// Callers are responsible for the length check; [`cosine_similarity`]
/// performs it before delegating here.
#[must_use]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Euclidean (L2) norm of a vector, via sum of squares.
#[must_use]
pub fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity between two vectors: `dot(a,b) / (‖a‖·‖b‖)`.
///
/// Returns a score in `[-1, 1]`: 1 for identical direction, 0 for
/// orthogonal, -1 for opposite.
///
/// # Errors
///
/// - [`RankError::DimensionMismatch`] if the vectors differ in length.
/// - [`RankError::DegenerateVector`] if either vector has zero norm; a
///   zero vector has no direction, so failing beats silently returning
///   NaN.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, RankError> {
    if a.len() != b.len() {
        return Err(RankError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(RankError::DegenerateVector);
    }

    Ok(dot(a, b) / (norm_a * norm_b))
}
