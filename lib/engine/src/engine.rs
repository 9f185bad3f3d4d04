//! The engine facade: the two operations callers use.
//!
//! An [`Engine`] holds only read-only configuration and an interest source,
//! so one instance can serve any number of threads at once.

use crate::collaborative::CollaborativeScorer;
use crate::config::EngineConfig;
use crate::content::ContentScorer;
use crate::fusion::{
    fuse, rank, rank_above, FusionWeights, RankedItem, RECOMMENDATION_EXPLANATION,
    RECOMMENDATION_REASON, SIMILARITY_REASON,
};
use crate::interest::{InterestSource, StaticInterests};
use ahash::AHashSet;
use rankx_core::{similarities, Document, Error, Result, TfidfVectorizer, UserProfile};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Personalized ranking plus the call-level explanation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendations {
    pub items: Vec<RankedItem>,
    pub explanation: String,
}

#[derive(Clone)]
pub struct Engine {
    config: EngineConfig,
    interests: Arc<dyn InterestSource>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine").field("config", &self.config).finish_non_exhaustive()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            interests: Arc::new(StaticInterests::default()),
        }
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            interests: Arc::new(StaticInterests::default()),
        })
    }

    /// Replace the interest source used by both scorers
    #[must_use]
    pub fn with_interests(mut self, interests: Arc<dyn InterestSource>) -> Self {
        self.interests = interests;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Rank `candidates` for `profile` and keep the best `limit`.
    ///
    /// Fails with [`Error::InvalidInput`] when `candidates` is empty, when
    /// `limit` is zero, or when two candidates share a key.
    pub fn recommend(
        &self,
        profile: &UserProfile,
        candidates: &[Document],
        limit: usize,
    ) -> Result<Recommendations> {
        validate_candidates(candidates)?;
        validate_limit(limit)?;

        let interests = self.interests.as_ref();
        let collaborative =
            CollaborativeScorer::new(&self.config, interests).score(profile, candidates);
        let content = ContentScorer::new(&self.config, interests).score(profile, candidates);
        debug!(
            user_id = profile.user_id,
            candidates = candidates.len(),
            read = profile.read.len(),
            liked = profile.liked.len(),
            "scored candidates"
        );

        let weights = FusionWeights {
            collaborative: self.config.collaborative_weight,
            content: self.config.content_weight,
        };
        let combined = fuse(candidates, &collaborative, &content, weights)?;
        let items = rank(candidates, &combined, limit, RECOMMENDATION_REASON)?;
        debug!(user_id = profile.user_id, returned = items.len(), "ranked recommendations");

        Ok(Recommendations {
            items,
            explanation: RECOMMENDATION_EXPLANATION.to_string(),
        })
    }

    /// Candidates whose TF-IDF cosine similarity to `target` clears the
    /// threshold, best first, at most `limit`. An empty list is a valid answer.
    pub fn find_similar(
        &self,
        target: &Document,
        candidates: &[Document],
        limit: usize,
    ) -> Result<Vec<RankedItem>> {
        validate_candidates(candidates)?;
        validate_limit(limit)?;

        let mut corpus = Vec::with_capacity(candidates.len() + 1);
        corpus.push(target.clone());
        corpus.extend_from_slice(candidates);

        let matrix = TfidfVectorizer::new(self.config.vectorizer.clone())?.fit_transform(&corpus)?;
        debug!(
            target = target.key,
            candidates = candidates.len(),
            vocabulary = matrix.dim(),
            "vectorized corpus"
        );

        let vectors = matrix.vectors();
        let (reference, rest) = vectors.split_first().ok_or_else(|| {
            Error::ComputationFault("vectorizer returned no vector for the target".to_string())
        })?;
        if reference.is_zero() {
            warn!(target = target.key, "target has no indexable terms");
        }

        let scores = similarities(reference, rest)?;
        let items = rank_above(
            candidates,
            &scores,
            self.config.similarity_threshold,
            limit,
            SIMILARITY_REASON,
        )?;
        debug!(target = target.key, returned = items.len(), "ranked similar posts");
        Ok(items)
    }
}

fn validate_candidates(candidates: &[Document]) -> Result<()> {
    if candidates.is_empty() {
        return Err(Error::InvalidInput("no candidate posts provided".to_string()));
    }
    let mut seen = AHashSet::with_capacity(candidates.len());
    for doc in candidates {
        if !seen.insert(doc.key) {
            return Err(Error::InvalidInput(format!("duplicate post id {}", doc.key)));
        }
    }
    Ok(())
}

fn validate_limit(limit: usize) -> Result<()> {
    if limit == 0 {
        return Err(Error::InvalidInput("limit must be at least 1".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedInterests;

    impl InterestSource for FixedInterests {
        fn interest_tags(&self, _profile: &UserProfile) -> AHashSet<String> {
            ["cooking".to_string()].into_iter().collect()
        }

        fn interest_text(&self, _profile: &UserProfile) -> String {
            "pasta sauce".to_string()
        }
    }

    fn tagged(key: i64, tag: &str) -> Document {
        Document::new(key, format!("post {}", key), "some body").with_tags([tag])
    }

    #[test]
    fn test_recommend_rejects_empty_candidates() {
        let err = Engine::default().recommend(&UserProfile::new(1), &[], 3).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_recommend_rejects_zero_limit() {
        let err = Engine::default()
            .recommend(&UserProfile::new(1), &[tagged(1, "a")], 0)
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_recommend_rejects_duplicate_keys() {
        let err = Engine::default()
            .recommend(&UserProfile::new(1), &[tagged(1, "a"), tagged(1, "b")], 2)
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_recommend_with_injected_interests() {
        let engine = Engine::default().with_interests(Arc::new(FixedInterests));
        let candidates = vec![tagged(1, "technology"), tagged(2, "cooking")];
        let result = engine.recommend(&UserProfile::new(1), &candidates, 2).unwrap();
        assert_eq!(result.items[0].key, 2);
        assert_eq!(result.explanation, RECOMMENDATION_EXPLANATION);
    }

    #[test]
    fn test_find_similar_rejects_empty() {
        let target = tagged(0, "x");
        let err = Engine::default().find_similar(&target, &[], 5).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_find_similar_stop_word_target_is_empty() {
        let target = Document::new(0, "The", "and of it");
        let candidates = vec![Document::new(1, "Rust", "ownership borrowing")];
        let result = Engine::default().find_similar(&target, &candidates, 5).unwrap();
        assert!(result.is_empty());
    }
}
