//! Record types produced by the category fetchers.
//!
//! Records are created once per fetch and never mutated afterwards.
//! Serialized field names follow the persisted JSON layout.

use serde::{Deserialize, Deserializer, Serialize};

/// Default joke category when the source omits one
pub const DEFAULT_JOKE_CATEGORY: &str = "general";

/// A quote scraped from the listing page (or taken from the fallback set)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote text, never empty
    #[serde(deserialize_with = "non_blank")]
    pub text: String,

    /// Attributed author
    pub author: String,

    /// Tags in the order the source listed them
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Quote {
    /// Create a new quote
    pub fn new(text: impl Into<String>, author: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            tags,
        }
    }

    /// Case-insensitive exact tag match
    pub fn has_tag(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == needle)
    }
}

fn non_blank<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let text = String::deserialize(deserializer)?;
    if text.trim().is_empty() {
        return Err(serde::de::Error::custom("quote text is empty"));
    }
    Ok(text)
}

/// A two-part joke
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,

    /// Joke category, `"general"` when unknown
    #[serde(rename = "type", default = "default_joke_category")]
    pub category: String,
}

fn default_joke_category() -> String {
    DEFAULT_JOKE_CATEGORY.to_string()
}

impl Joke {
    /// Create a new joke
    pub fn new(
        setup: impl Into<String>,
        punchline: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            setup: setup.into(),
            punchline: punchline.into(),
            category: category.into(),
        }
    }
}

/// A short encyclopedia summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// Article title
    pub title: String,

    /// Full summary text (only truncated when displayed)
    pub extract: String,

    /// Desktop page URL of the article
    #[serde(rename = "url")]
    pub source_url: String,
}

impl Fact {
    /// Create a new fact
    pub fn new(
        title: impl Into<String>,
        extract: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            extract: extract.into(),
            source_url: source_url.into(),
        }
    }
}

/// A post from a social "hot" listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialPost {
    pub title: String,
    pub author: String,
    pub score: i64,

    /// Absolute link to the post
    pub url: String,

    /// Group (subreddit) the listing was fetched from
    #[serde(rename = "subreddit")]
    pub origin_group: String,
}
