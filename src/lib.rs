//! # rankx
//!
//! A content recommendation engine for blog posts.
//!
//! rankx ranks posts for a reader by fusing two signals, a collaborative
//! score from reading and liking history and a content score from word
//! overlap with the reader's interests, and finds posts similar to a given
//! post with request-scoped TF-IDF and cosine similarity.
//!
//! Every call is a pure function of its inputs: candidates and history are
//! supplied inline, the vectorizer is refit per call, and nothing is cached.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! rankx recommend --input request.json
//! rankx similar --input similar.json --pretty
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use rankx::prelude::*;
//!
//! let engine = Engine::default();
//! let target = Document::new(0, "Rust ownership", "The borrow checker enforces ownership rules");
//! let candidates = vec![
//!     Document::new(1, "Borrow checker tips", "Working with ownership in Rust"),
//!     Document::new(2, "Sourdough basics", "Flour water salt starter"),
//! ];
//! let similar = engine.find_similar(&target, &candidates, 5).unwrap();
//! assert_eq!(similar[0].key, 1);
//! ```
//!
//! ## Crate Structure
//!
//! - `rankx-core` - Documents, profiles, tokenizer, TF-IDF vectorizer, cosine similarity
//! - `rankx-engine` - Interest sources, scorers, fusion, engine facade, request types

// Re-export core types
pub use rankx_core::{
    cosine_similarity, Document, DocumentKey, Error, FeatureVector, Result, TfidfMatrix,
    TfidfVectorizer, UserProfile, VectorizerConfig,
};

// Re-export engine
pub use rankx_engine::{
    Engine, EngineConfig, InterestSource, RankedItem, RecommendationRequest,
    RecommendationResponse, Recommendations, ScoreMap, SimilarPostsRequest,
    SimilarPostsResponse, StaticInterests,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Document, Engine, EngineConfig, Error, InterestSource, RankedItem, Recommendations,
        Result, StaticInterests, UserProfile,
    };
}
