//! Collaborative scorer
//!
//! Scores candidates from reader behavior only; the candidate's text is
//! never read, only its tags.

use crate::config::EngineConfig;
use crate::interest::InterestSource;
use crate::ScoreMap;
use rankx_core::{Document, UserProfile};

/// The tag boost is applied once per candidate whose tags meet the interest
/// set. The original service added it once per matching tag, so a post
/// tagged `["technology", "web"]` reached 1.0 there and stays at 0.8 here.
pub struct CollaborativeScorer<'a> {
    config: &'a EngineConfig,
    interests: &'a dyn InterestSource,
}

impl<'a> CollaborativeScorer<'a> {
    pub fn new(config: &'a EngineConfig, interests: &'a dyn InterestSource) -> Self {
        Self { config, interests }
    }

    /// Score every candidate. Result is clamped to [0, 1].
    pub fn score(&self, profile: &UserProfile, candidates: &[Document]) -> ScoreMap {
        let tags = self.interests.interest_tags(profile);
        let has_read = profile.has_read_history();

        candidates
            .iter()
            .map(|doc| {
                let mut score = self.config.base_score;
                if !tags.is_empty() && doc.has_tag_in(tags.iter().map(String::as_str)) {
                    score += self.config.tag_boost;
                }
                if has_read {
                    score *= self.config.read_boost;
                }
                (doc.key, score.clamp(0.0, 1.0))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interest::StaticInterests;

    fn candidates() -> Vec<Document> {
        vec![
            Document::new(1, "a", "b").with_tags(["Technology", "web"]),
            Document::new(2, "c", "d").with_tags(["cooking"]),
            Document::new(3, "e", "f"),
        ]
    }

    fn score(profile: &UserProfile) -> ScoreMap {
        let config = EngineConfig::default();
        let interests = StaticInterests::default();
        CollaborativeScorer::new(&config, &interests).score(profile, &candidates())
    }

    #[test]
    fn test_empty_history_is_base_score() {
        let scores = score(&UserProfile::new(1));
        assert_eq!(scores.len(), 3);
        assert!(scores.values().all(|s| (*s - 0.5).abs() < 1e-12));
    }

    #[test]
    fn test_liked_history_boosts_matching_tags_once() {
        let scores = score(&UserProfile::new(1).with_liked(vec![9]));
        assert!((scores[&1] - 0.8).abs() < 1e-12);
        assert!((scores[&2] - 0.5).abs() < 1e-12);
        assert!((scores[&3] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_read_history_multiplies() {
        let scores = score(&UserProfile::new(1).with_read(vec![100]));
        assert!((scores[&1] - 0.55).abs() < 1e-12);
        assert!((scores[&2] - 0.55).abs() < 1e-12);
    }

    #[test]
    fn test_both_histories() {
        let profile = UserProfile::new(1).with_read(vec![100]).with_liked(vec![9]);
        let scores = score(&profile);
        assert!((scores[&1] - 0.88).abs() < 1e-12);
        assert!((scores[&2] - 0.55).abs() < 1e-12);
    }

    #[test]
    fn test_clamped_to_one() {
        let config = EngineConfig {
            tag_boost: 0.6,
            ..Default::default()
        };
        let interests = StaticInterests::default();
        let profile = UserProfile::new(1).with_read(vec![1]).with_liked(vec![1]);
        let scores = CollaborativeScorer::new(&config, &interests).score(&profile, &candidates());
        assert_eq!(scores[&1], 1.0);
    }
}
