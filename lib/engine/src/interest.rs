//! Reader interest derivation
//!
//! The scorers never look at what a reader actually read; they ask an
//! [`InterestSource`] instead. [`StaticInterests`] answers with a fixed tag
//! set and phrase because this engine has no way to fetch past posts. Wire a
//! different source to a real history lookup without touching the scorers.

use ahash::AHashSet;
use rankx_core::UserProfile;

pub const DEFAULT_INTEREST_TAGS: &[&str] = &["technology", "programming", "web"];
pub const DEFAULT_INTEREST_TEXT: &str = "technology programming web development";

pub trait InterestSource: Send + Sync {
    /// Lower-cased tags the reader is assumed to like
    fn interest_tags(&self, profile: &UserProfile) -> AHashSet<String>;

    /// Free text describing what the reader tends to read
    fn interest_text(&self, profile: &UserProfile) -> String;
}

/// Placeholder interests: a liked history maps to a fixed tag set, any
/// read history maps to a fixed phrase.
#[derive(Debug, Clone)]
pub struct StaticInterests {
    tags: Vec<String>,
    text: String,
}

impl StaticInterests {
    pub fn new<I, S>(tags: I, text: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tags: tags.into_iter().map(|t| t.as_ref().to_lowercase()).collect(),
            text: text.into(),
        }
    }
}

impl Default for StaticInterests {
    fn default() -> Self {
        Self::new(DEFAULT_INTEREST_TAGS.iter().copied(), DEFAULT_INTEREST_TEXT)
    }
}

impl InterestSource for StaticInterests {
    fn interest_tags(&self, profile: &UserProfile) -> AHashSet<String> {
        if !profile.has_liked_history() {
            return AHashSet::new();
        }
        self.tags.iter().cloned().collect()
    }

    fn interest_text(&self, _profile: &UserProfile) -> String {
        self.text.clone()
    }
}
