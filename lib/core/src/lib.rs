//! # rankx Core
//!
//! Core library for the rankx recommendation engine.
//!
//! This crate provides the data model and the text-side algorithms:
//!
//! - [`Document`] / [`UserProfile`] - the per-call inputs
//! - [`TfidfVectorizer`] - request-scoped TF-IDF over unigrams and bigrams
//! - [`FeatureVector`] - dense `f64` feature vector
//! - [`cosine_similarity`] - similarity scorer
//!
//! ## Example
//!
//! ```rust
//! use rankx_core::{Document, TfidfVectorizer, cosine_similarity};
//!
//! let docs = vec![
//!     Document::new(1, "Rust async", "Futures and executors"),
//!     Document::new(2, "Async Rust", "Executors drive futures"),
//! ];
//! let matrix = TfidfVectorizer::default().fit_transform(&docs).unwrap();
//! let score = cosine_similarity(&matrix.vectors()[0], &matrix.vectors()[1]).unwrap();
//! assert!(score > 0.1);
//! ```

pub mod document;
pub mod error;
pub mod similarity;
pub mod tfidf;
pub mod tokenize;
pub mod vector;

pub use document::{Document, DocumentKey, UserProfile};
pub use error::{Error, Result};
pub use similarity::{cosine_similarity, similarities};
pub use tfidf::{TfidfMatrix, TfidfVectorizer, VectorizerConfig, DEFAULT_MAX_FEATURES};
pub use vector::FeatureVector;
