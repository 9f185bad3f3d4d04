//! Content scorer
//!
//! Word overlap between the reader's interest text and each candidate's
//! `title body tags` text.

use crate::config::EngineConfig;
use crate::interest::InterestSource;
use crate::ScoreMap;
use rankx_core::tokenize::word_set;
use rankx_core::{Document, UserProfile};

pub struct ContentScorer<'a> {
    config: &'a EngineConfig,
    interests: &'a dyn InterestSource,
}

impl<'a> ContentScorer<'a> {
    pub fn new(config: &'a EngineConfig, interests: &'a dyn InterestSource) -> Self {
        Self { config, interests }
    }

    pub fn score(&self, profile: &UserProfile, candidates: &[Document]) -> ScoreMap {
        if !profile.has_read_history() {
            return candidates
                .iter()
                .map(|doc| (doc.key, self.config.neutral_score))
                .collect();
        }

        let interest_words = word_set(&self.interests.interest_text(profile));

        candidates
            .iter()
            .map(|doc| {
                let overlap = word_set(&doc.text())
                    .intersection(&interest_words)
                    .count();
                let score = self.config.content_floor + self.config.overlap_step * overlap as f64;
                (doc.key, score.min(1.0))
            })
            .collect()
    }
}
