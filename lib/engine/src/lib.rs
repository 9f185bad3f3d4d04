//! # rankx Engine
//!
//! Scoring, fusion and ranking on top of `rankx-core`.
//!
//! ## Architecture
//!
//! ```text
//!                     ┌──────────────┐
//!  profile ──────────>│ Collaborative│──┐
//!     │               └──────────────┘  │   ┌─────────┐
//!     │  ┌──────────┐                   ├──>│ Fusion  │──> ranked items
//!     └─>│ Interest │ ┌──────────────┐  │   └─────────┘
//!        │  Source  │>│   Content    │──┘
//!        └──────────┘ └──────────────┘
//!
//!  target + candidates ──> TF-IDF ──> cosine ──> threshold ──> ranked items
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rankx_engine::Engine;
//! use rankx_core::{Document, UserProfile};
//!
//! let engine = Engine::default();
//! let profile = UserProfile::new(1).with_liked(vec![10]);
//! let candidates = vec![
//!     Document::new(1, "Cast iron care", "Season it well").with_tags(["cooking"]),
//!     Document::new(2, "Axum routing", "Handlers and extractors").with_tags(["web"]),
//! ];
//! let result = engine.recommend(&profile, &candidates, 1).unwrap();
//! assert_eq!(result.items[0].key, 2);
//! ```

pub mod collaborative;
pub mod config;
pub mod content;
pub mod engine;
pub mod fusion;
pub mod interest;
pub mod request;

use ahash::AHashMap;
use rankx_core::DocumentKey;

/// Per-candidate scores from one scorer. A missing key means "not scored".
pub type ScoreMap = AHashMap<DocumentKey, f64>;

pub use collaborative::CollaborativeScorer;
pub use config::EngineConfig;
pub use content::ContentScorer;
pub use engine::{Engine, Recommendations};
pub use fusion::{RankedItem, RECOMMENDATION_EXPLANATION, RECOMMENDATION_REASON, SIMILARITY_REASON};
pub use interest::{InterestSource, StaticInterests};
pub use request::{
    RecommendationRequest, RecommendationResponse, SimilarPost, SimilarPostsRequest,
    SimilarPostsResponse,
};
