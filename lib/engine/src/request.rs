//! Request and response bodies exchanged with callers.
//!
//! Counts are signed on the wire so that zero and negative values reach the
//! boundary check and come back as [`Error::InvalidInput`].

use crate::engine::Engine;
use crate::fusion::RankedItem;
use rankx_core::{Document, DocumentKey, Error, Result, UserProfile};
use serde::{Deserialize, Serialize};

fn default_num_recommendations() -> i64 {
    10
}

fn default_num_similar() -> i64 {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub user_profile: UserProfile,
    pub available_posts: Vec<Document>,
    #[serde(default = "default_num_recommendations")]
    pub num_recommendations: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResponse {
    pub recommendations: Vec<RankedItem>,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarPostsRequest {
    pub post_id: DocumentKey,
    pub post_content: Document,
    pub similar_posts: Vec<Document>,
    #[serde(default = "default_num_similar")]
    pub num_similar: i64,
}

/// One similar post as it appears on the wire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarPost {
    pub post_id: DocumentKey,
    pub title: String,
    pub similarity_score: f64,
}

impl From<RankedItem> for SimilarPost {
    fn from(item: RankedItem) -> Self {
        Self {
            post_id: item.key,
            title: item.title,
            similarity_score: item.score,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarPostsResponse {
    pub similar_posts: Vec<SimilarPost>,
}

fn to_limit(value: i64, field: &str) -> Result<usize> {
    match usize::try_from(value) {
        Ok(limit) if limit >= 1 => Ok(limit),
        _ => Err(Error::InvalidInput(format!(
            "{} must be at least 1, got {}",
            field, value
        ))),
    }
}

impl RecommendationRequest {
    /// Parse a request body. Malformed JSON is [`Error::Serialization`].
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn handle(&self, engine: &Engine) -> Result<RecommendationResponse> {
        let limit = to_limit(self.num_recommendations, "num_recommendations")?;
        let result = engine.recommend(&self.user_profile, &self.available_posts, limit)?;
        Ok(RecommendationResponse {
            recommendations: result.items,
            explanation: Some(result.explanation),
        })
    }
}

impl SimilarPostsRequest {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn handle(&self, engine: &Engine) -> Result<SimilarPostsResponse> {
        if self.post_id != self.post_content.key {
            return Err(Error::InvalidInput(format!(
                "post_id {} does not match post_content id {}",
                self.post_id, self.post_content.key
            )));
        }
        let limit = to_limit(self.num_similar, "num_similar")?;
        let items = engine.find_similar(&self.post_content, &self.similar_posts, limit)?;
        Ok(SimilarPostsResponse {
            similar_posts: items.into_iter().map(SimilarPost::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recommendation_request_defaults() {
        let req: RecommendationRequest = serde_json::from_value(json!({
            "user_profile": { "user_id": 1 },
            "available_posts": [
                { "post_id": 1, "title": "a", "content": "b", "tags": ["web"] }
            ]
        }))
        .unwrap();
        assert_eq!(req.num_recommendations, 10);

        let resp = req.handle(&Engine::default()).unwrap();
        assert_eq!(resp.recommendations.len(), 1);
        assert!(resp.explanation.is_some());
    }

    #[test]
    fn test_negative_count_is_invalid_input() {
        let req: RecommendationRequest = serde_json::from_value(json!({
            "user_profile": { "user_id": 1 },
            "available_posts": [{ "post_id": 1, "title": "a", "content": "b" }],
            "num_recommendations": -2
        }))
        .unwrap();
        assert!(req.handle(&Engine::default()).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_similar_request_serializes_original_names() {
        let req: SimilarPostsRequest = serde_json::from_value(json!({
            "post_id": 1,
            "post_content": { "post_id": 1, "title": "Rust ownership", "content": "borrow checker rules" },
            "similar_posts": [
                { "post_id": 2, "title": "Rust borrow checker", "content": "ownership rules explained" },
                { "post_id": 3, "title": "Sourdough", "content": "starter flour water" }
            ]
        }))
        .unwrap();
        assert_eq!(req.num_similar, 5);

        let resp = req.handle(&Engine::default()).unwrap();
        assert_eq!(resp.similar_posts.len(), 1);
        let value = serde_json::to_value(&resp).unwrap();
        let item = &value["similar_posts"][0];
        assert_eq!(item["post_id"], 2);
        assert_eq!(item["title"], "Rust borrow checker");
        assert!(item["similarity_score"].as_f64().unwrap() > 0.1);
        assert!(item.get("score").is_none());
        assert!(item.get("reason").is_none());
    }

    #[test]
    fn test_similar_request_id_mismatch() {
        let req = SimilarPostsRequest {
            post_id: 9,
            post_content: Document::new(1, "a", "b"),
            similar_posts: vec![Document::new(2, "c", "d")],
            num_similar: 5,
        };
        assert!(req.handle(&Engine::default()).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_malformed_body_is_serialization_error() {
        let err = RecommendationRequest::from_json(r#"{ "user_profile": 5 }"#).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(err.is_invalid_input());

        let err = SimilarPostsRequest::from_json("not json").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_from_json_original_body() {
        let req = SimilarPostsRequest::from_json(
            r#"{
                "post_id": 4,
                "post_content": { "post_id": 4, "title": "a", "content": "b" },
                "similar_posts": [{ "post_id": 5, "title": "c", "content": "d", "tags": ["x"] }],
                "num_similar": 2
            }"#,
        )
        .unwrap();
        assert_eq!(req.num_similar, 2);
        assert_eq!(req.similar_posts[0].tags, vec!["x"]);
    }
}
