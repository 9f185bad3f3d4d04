//! Cosine similarity scorer

use crate::error::{Error, Result};
use crate::vector::FeatureVector;

/// Cosine similarity of two vectors of equal dimension.
/// Returns 0.0 when either norm is zero.
pub fn cosine_similarity(a: &FeatureVector, b: &FeatureVector) -> Result<f64> {
    if a.dim() != b.dim() {
        return Err(Error::ComputationFault(format!(
            "dimension mismatch: {} vs {}",
            a.dim(),
            b.dim()
        )));
    }

    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    let similarity = a.dot(b) / (norm_a * norm_b);
    if !similarity.is_finite() {
        return Err(Error::ComputationFault(format!(
            "non-finite cosine similarity {}",
            similarity
        )));
    }
    Ok(similarity)
}

/// Similarity of `reference` to each candidate, in candidate order
pub fn similarities(reference: &FeatureVector, candidates: &[FeatureVector]) -> Result<Vec<f64>> {
    candidates
        .iter()
        .map(|candidate| cosine_similarity(reference, candidate))
        .collect()
}
