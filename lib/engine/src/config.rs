//! Engine configuration
//!
//! Every field defaults to the production constants, so an empty JSON
//! object (or no config file at all) yields the standard engine.

use rankx_core::{Error, Result, VectorizerConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Weights and constants used by the scorers and fusion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Weight of the collaborative score in fusion
    pub collaborative_weight: f64,
    /// Weight of the content score in fusion
    pub content_weight: f64,
    /// Collaborative score before boosts
    pub base_score: f64,
    /// Added once when a candidate's tags meet the reader's interests
    pub tag_boost: f64,
    /// Multiplier applied when the reader has any read history
    pub read_boost: f64,
    /// Content score with history but no overlap
    pub content_floor: f64,
    /// Content score added per overlapping word
    pub overlap_step: f64,
    /// Content score for every candidate when the reader has no read history
    pub neutral_score: f64,
    /// Similar items must score strictly above this
    pub similarity_threshold: f64,
    pub vectorizer: VectorizerConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            collaborative_weight: 0.6,
            content_weight: 0.4,
            base_score: 0.5,
            tag_boost: 0.3,
            read_boost: 1.1,
            content_floor: 0.3,
            overlap_step: 0.1,
            neutral_score: 0.5,
            similarity_threshold: 0.1,
            vectorizer: VectorizerConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let values = [
            ("collaborative_weight", self.collaborative_weight),
            ("content_weight", self.content_weight),
            ("base_score", self.base_score),
            ("tag_boost", self.tag_boost),
            ("read_boost", self.read_boost),
            ("content_floor", self.content_floor),
            ("overlap_step", self.overlap_step),
            ("neutral_score", self.neutral_score),
            ("similarity_threshold", self.similarity_threshold),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }
        if self.collaborative_weight + self.content_weight == 0.0 {
            return Err(Error::InvalidConfig(
                "collaborative_weight and content_weight cannot both be zero".to_string(),
            ));
        }
        self.vectorizer.validate()
    }
}
