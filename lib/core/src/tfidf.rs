//! TF-IDF vectorizer
//!
//! Fits a vocabulary over exactly the documents it is given and returns one
//! feature vector per document. Nothing is kept between calls: every
//! [`TfidfVectorizer::fit_transform`] builds a fresh vocabulary.
//!
//! ```text
//! tfidf(t, d) = tf(t, d) × idf(t)
//! idf(t)      = ln((1 + n) / (1 + df(t))) + 1
//! ```

use crate::document::Document;
use crate::error::{Error, Result};
use crate::tokenize::{content_tokens, ngrams};
use crate::vector::FeatureVector;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Vectorizer settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VectorizerConfig {
    /// Vocabulary cap, keeping the terms with the highest aggregate weight
    pub max_features: usize,
    /// Inclusive n-gram range
    pub ngram_range: (usize, usize),
    /// L2-normalize each row
    pub normalize: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            ngram_range: (1, 2),
            normalize: true,
        }
    }
}

impl VectorizerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_features == 0 {
            return Err(Error::InvalidConfig("max_features must be at least 1".to_string()));
        }
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(Error::InvalidConfig(format!(
                "invalid ngram_range ({}, {})",
                min_n, max_n
            )));
        }
        Ok(())
    }
}

/// Output of one vectorization pass. Vectors are aligned with the input documents.
#[derive(Debug, Clone, PartialEq)]
pub struct TfidfMatrix {
    vocabulary: Vec<String>,
    idf: Vec<f64>,
    vectors: Vec<FeatureVector>,
}

impl TfidfMatrix {
    /// Kept terms, in index order
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    pub fn vectors(&self) -> &[FeatureVector] {
        &self.vectors
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.vocabulary.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    config: VectorizerConfig,
}

impl TfidfVectorizer {
    pub fn new(config: VectorizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    pub fn fit_transform(&self, documents: &[Document]) -> Result<TfidfMatrix> {
        let texts: Vec<String> = documents.iter().map(Document::normalized_text).collect();
        self.fit_transform_texts(&texts)
    }

    /// Same as [`fit_transform`](Self::fit_transform) over raw texts
    pub fn fit_transform_texts<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Result<TfidfMatrix> {
        let (min_n, max_n) = self.config.ngram_range;

        // term -> count, per document. BTreeMap keeps iteration order fixed.
        let term_counts: Vec<BTreeMap<String, usize>> = texts
            .par_iter()
            .map(|text| {
                let tokens = content_tokens(text.as_ref());
                let mut counts = BTreeMap::new();
                for term in ngrams(&tokens, min_n, max_n) {
                    *counts.entry(term).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        let n_docs = texts.len() as f64;
        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for counts in &term_counts {
            for term in counts.keys() {
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let idf_of = |df: usize| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0;

        let mut weights: BTreeMap<&str, f64> = BTreeMap::new();
        for counts in &term_counts {
            for (term, &tf) in counts {
                let idf = idf_of(doc_freq[term.as_str()]);
                *weights.entry(term.as_str()).or_insert(0.0) += tf as f64 * idf;
            }
        }

        let mut ranked: Vec<(&str, f64)> = weights.into_iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.config.max_features);

        let mut vocabulary: Vec<String> = ranked.into_iter().map(|(t, _)| t.to_string()).collect();
        vocabulary.sort();
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|t| idf_of(doc_freq[t.as_str()]))
            .collect();

        let dim = vocabulary.len();
        let normalize = self.config.normalize;
        let vectors: Vec<FeatureVector> = term_counts
            .par_iter()
            .map(|counts| {
                let mut vector = FeatureVector::zeros(dim);
                let data = vector.as_mut_slice();
                for (term, &tf) in counts {
                    if let Ok(idx) = vocabulary.binary_search(term) {
                        data[idx] = tf as f64 * idf[idx];
                    }
                }
                if normalize {
                    vector.normalize();
                }
                vector
            })
            .collect();

        if vectors.len() != texts.len() {
            return Err(Error::ComputationFault(format!(
                "vectorizer produced {} vectors for {} documents",
                vectors.len(),
                texts.len()
            )));
        }

        Ok(TfidfMatrix {
            vocabulary,
            idf,
            vectors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs() -> Vec<Document> {
        vec![
            Document::new(1, "Rust async runtime", "Tokio drives async tasks").with_tags(["rust"]),
            Document::new(2, "Cooking pasta", "Boil water then add pasta").with_tags(["cooking"]),
            Document::new(3, "Rust web servers", "Async handlers in Rust").with_tags(["web"]),
        ]
    }

    #[test]
    fn test_one_vector_per_document() {
        let matrix = TfidfVectorizer::default().fit_transform(&docs()).unwrap();
        assert_eq!(matrix.len(), 3);
        assert!(matrix.vectors().iter().all(|v| v.dim() == matrix.dim()));
    }

    #[test]
    fn test_bigrams_in_vocabulary() {
        let matrix = TfidfVectorizer::default().fit_transform(&docs()).unwrap();
        assert!(matrix.index_of("rust").is_some());
        assert!(matrix.index_of("cooking pasta").is_some());
        assert!(matrix.index_of("the").is_none());
    }

    #[test]
    fn test_stop_word_document_gets_zero_vector() {
        let mut all = docs();
        all.push(Document::new(4, "The", "and of the it is"));
        let matrix = TfidfVectorizer::default().fit_transform(&all).unwrap();
        assert_eq!(matrix.len(), 4);
        assert!(matrix.vectors()[3].is_zero());
    }

    #[test]
    fn test_deterministic() {
        let vectorizer = TfidfVectorizer::default();
        let a = vectorizer.fit_transform(&docs()).unwrap();
        let b = vectorizer.fit_transform(&docs()).unwrap();
        assert_eq!(a, b);
        for (x, y) in a.vectors().iter().zip(b.vectors()) {
            let xb: Vec<u64> = x.as_slice().iter().map(|f| f.to_bits()).collect();
            let yb: Vec<u64> = y.as_slice().iter().map(|f| f.to_bits()).collect();
            assert_eq!(xb, yb);
        }
    }

    #[test]
    fn test_rare_term_has_higher_idf() {
        let matrix = TfidfVectorizer::default().fit_transform(&docs()).unwrap();
        let rust = matrix.idf()[matrix.index_of("rust").unwrap()];
        let pasta = matrix.idf()[matrix.index_of("pasta").unwrap()];
        assert!(pasta > rust);
    }

    #[test]
    fn test_max_features_cap() {
        let config = VectorizerConfig {
            max_features: 3,
            ..Default::default()
        };
        let matrix = TfidfVectorizer::new(config).unwrap().fit_transform(&docs()).unwrap();
        assert_eq!(matrix.dim(), 3);
        // "rust" and "async" carry the most weight across the corpus
        assert!(matrix.index_of("rust").is_some());
        assert!(matrix.index_of("async").is_some());
    }

    #[test]
    fn test_rows_are_unit_length() {
        let matrix = TfidfVectorizer::default().fit_transform(&docs()).unwrap();
        for v in matrix.vectors() {
            assert!((v.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_invalid_config() {
        let config = VectorizerConfig {
            ngram_range: (2, 1),
            ..Default::default()
        };
        assert!(matches!(TfidfVectorizer::new(config), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_input() {
        let matrix = TfidfVectorizer::default().fit_transform(&[]).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.dim(), 0);
    }
}
