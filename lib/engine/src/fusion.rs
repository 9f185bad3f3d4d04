//! Fusion and ranking
//!
//! Merges scorer outputs into one ordered list. Ordering is a stable sort on
//! the score, so equal scores keep the order in which candidates arrived.

use crate::ScoreMap;
use rankx_core::{Document, DocumentKey, Error, Result};
use serde::{Deserialize, Serialize};

pub const RECOMMENDATION_REASON: &str =
    "Based on your reading history and similar users' preferences";
pub const RECOMMENDATION_EXPLANATION: &str =
    "Personalized recommendations based on your reading history and similar users' preferences";
pub const SIMILARITY_REASON: &str = "Shares key terms with the selected post";

/// One entry of a ranked result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedItem {
    #[serde(rename = "post_id")]
    pub key: DocumentKey,
    pub title: String,
    pub score: f64,
    #[serde(rename = "reason")]
    pub rationale: String,
}

/// Fusion weights
#[derive(Debug, Clone, Copy)]
pub struct FusionWeights {
    pub collaborative: f64,
    pub content: f64,
}

/// Weighted sum of both score maps for every candidate, in candidate order.
/// A candidate missing from either map is a fault, never a default score.
pub fn fuse(
    candidates: &[Document],
    collaborative: &ScoreMap,
    content: &ScoreMap,
    weights: FusionWeights,
) -> Result<Vec<f64>> {
    candidates
        .iter()
        .map(|doc| {
            let cf = collaborative.get(&doc.key).ok_or_else(|| missing("collaborative", doc.key))?;
            let cb = content.get(&doc.key).ok_or_else(|| missing("content", doc.key))?;
            let combined = weights.collaborative * cf + weights.content * cb;
            if !combined.is_finite() {
                return Err(Error::ComputationFault(format!(
                    "non-finite combined score for post {}",
                    doc.key
                )));
            }
            Ok(combined)
        })
        .collect()
}

fn missing(scorer: &str, key: DocumentKey) -> Error {
    Error::ComputationFault(format!("{} scorer did not score post {}", scorer, key))
}

/// Sort candidates by `scores` descending (stable), keep at most `limit`,
/// and tag each with `rationale`. `scores` must be aligned with `candidates`.
pub fn rank(
    candidates: &[Document],
    scores: &[f64],
    limit: usize,
    rationale: &str,
) -> Result<Vec<RankedItem>> {
    rank_filtered(candidates, scores, limit, rationale, |_| true)
}

/// Like [`rank`], but drops every candidate scoring `<= threshold` first
pub fn rank_above(
    candidates: &[Document],
    scores: &[f64],
    threshold: f64,
    limit: usize,
    rationale: &str,
) -> Result<Vec<RankedItem>> {
    rank_filtered(candidates, scores, limit, rationale, |score| score > threshold)
}

fn rank_filtered<F>(
    candidates: &[Document],
    scores: &[f64],
    limit: usize,
    rationale: &str,
    keep: F,
) -> Result<Vec<RankedItem>>
where
    F: Fn(f64) -> bool,
{
    if candidates.len() != scores.len() {
        return Err(Error::ComputationFault(format!(
            "{} scores for {} candidates",
            scores.len(),
            candidates.len()
        )));
    }

    let mut order: Vec<(usize, f64)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, score)| keep(*score))
        .collect();

    // sort_by is stable
    order.sort_by(|a, b| b.1.total_cmp(&a.1));
    order.truncate(limit);

    Ok(order
        .into_iter()
        .map(|(idx, score)| {
            let doc = &candidates[idx];
            RankedItem {
                key: doc.key,
                title: doc.title.clone(),
                score,
                rationale: rationale.to_string(),
            }
        })
        .collect())
}
