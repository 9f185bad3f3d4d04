use serde::{Deserialize, Serialize};

/// Externally assigned item key, unique within one candidate set
pub type DocumentKey = i64;

/// A post with the three text fields the engine reads
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(alias = "post_id")]
    pub key: DocumentKey,
    pub title: String,
    #[serde(alias = "content")]
    pub body: String,
    /// Order carries no meaning
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Document {
    #[inline]
    #[must_use]
    pub fn new(key: DocumentKey, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
            body: body.into(),
            tags: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Concatenated `title body tags` text, case preserved
    pub fn text(&self) -> String {
        format!("{} {} {}", self.title, self.body, self.tags.join(" "))
    }

    /// Concatenated text, lower-cased. This is what every scorer reads.
    pub fn normalized_text(&self) -> String {
        self.text().to_lowercase()
    }

    /// Whether any tag matches one of `interests` (tags compared lower-cased)
    pub fn has_tag_in<'a, I>(&self, interests: I) -> bool
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        self.tags.iter().any(|tag| {
            let tag = tag.to_lowercase();
            interests.clone().into_iter().any(|interest| interest == tag)
        })
    }
}

/// A reader and their histories. Referenced keys need not be among the
/// candidates of the current call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub user_id: i64,
    #[serde(default, alias = "read_posts")]
    pub read: Vec<DocumentKey>,
    #[serde(default, alias = "liked_posts")]
    pub liked: Vec<DocumentKey>,
    /// Free-form interaction records, passed through untouched
    #[serde(default, alias = "interaction_history")]
    pub interactions: Vec<serde_json::Value>,
}

impl UserProfile {
    #[inline]
    #[must_use]
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn with_read(mut self, read: Vec<DocumentKey>) -> Self {
        self.read = read;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_liked(mut self, liked: Vec<DocumentKey>) -> Self {
        self.liked = liked;
        self
    }

    #[inline]
    pub fn has_read_history(&self) -> bool {
        !self.read.is_empty()
    }

    #[inline]
    pub fn has_liked_history(&self) -> bool {
        !self.liked.is_empty()
    }
}
