//! The unified result of an aggregation run.
//!
//! A bundle owns every record it holds. It is only ever changed by
//! replacing a whole category, and each replacement re-tallies `stats`
//! so the counts always match the sequences.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;

use super::records::{Fact, Joke, Quote, SocialPost};

/// Default file name for a saved bundle
pub const DEFAULT_BUNDLE_FILE: &str = "scraped_data.json";

/// Summary statistics for a bundle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_quotes: usize,
    #[serde(default)]
    pub total_jokes: usize,
    #[serde(default)]
    pub total_facts: usize,
    #[serde(default)]
    pub total_reddit_posts: usize,

    /// When the counts were last computed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrape_time: Option<DateTime<Utc>>,
}

impl Stats {
    /// Metric names and counts, in display order (timestamp excluded)
    pub fn counts(&self) -> [(&'static str, usize); 4] {
        [
            ("total_quotes", self.total_quotes),
            ("total_jokes", self.total_jokes),
            ("total_facts", self.total_facts),
            ("total_reddit_posts", self.total_reddit_posts),
        ]
    }
}

/// All fetched categories plus summary statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultBundle {
    /// When the bundle was created
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub quotes: Vec<Quote>,

    #[serde(default)]
    pub jokes: Vec<Joke>,

    #[serde(default)]
    pub facts: Vec<Fact>,

    #[serde(rename = "reddit_posts", default)]
    pub social_posts: Vec<SocialPost>,

    #[serde(default)]
    pub stats: Stats,
}

impl Default for ResultBundle {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultBundle {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self {
            created_at: Utc::now(),
            quotes: Vec::new(),
            jokes: Vec::new(),
            facts: Vec::new(),
            social_posts: Vec::new(),
            stats: Stats::default(),
        }
    }

    pub fn replace_quotes(&mut self, quotes: Vec<Quote>) {
        self.quotes = quotes;
        self.refresh_stats();
    }

    pub fn replace_jokes(&mut self, jokes: Vec<Joke>) {
        self.jokes = jokes;
        self.refresh_stats();
    }

    pub fn replace_facts(&mut self, facts: Vec<Fact>) {
        self.facts = facts;
        self.refresh_stats();
    }

    pub fn replace_social_posts(&mut self, posts: Vec<SocialPost>) {
        self.social_posts = posts;
        self.refresh_stats();
    }

    /// Recompute counts and stamp the completion time
    pub fn refresh_stats(&mut self) {
        self.stats = Stats {
            total_quotes: self.quotes.len(),
            total_jokes: self.jokes.len(),
            total_facts: self.facts.len(),
            total_reddit_posts: self.social_posts.len(),
            scrape_time: Some(Utc::now()),
        };
    }

    /// True when no category holds any record
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
            && self.jokes.is_empty()
            && self.facts.is_empty()
            && self.social_posts.is_empty()
    }

    /// Quotes whose author contains `needle` (case-insensitive)
    pub fn find_quotes_by_author(&self, needle: &str) -> Vec<&Quote> {
        let needle = needle.to_lowercase();

        self.quotes
            .iter()
            .filter(|q| q.author.to_lowercase().contains(&needle))
            .collect()
    }

    /// Quotes carrying a tag equal to `needle` (case-insensitive)
    pub fn find_quotes_by_tag(&self, needle: &str) -> Vec<&Quote> {
        self.quotes.iter().filter(|q| q.has_tag(needle)).collect()
    }

    /// Distinct quote authors in first-seen order
    pub fn authors(&self) -> Vec<&str> {
        let mut authors: Vec<&str> = Vec::new();
        for quote in &self.quotes {
            if !authors.contains(&quote.author.as_str()) {
                authors.push(&quote.author);
            }
        }
        authors
    }

    /// Distinct quote tags in first-seen order
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for tag in self.quotes.iter().flat_map(|q| q.tags.iter()) {
            if !tags.contains(&tag.as_str()) {
                tags.push(tag);
            }
        }
        tags
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize bundle")
    }

    /// Parse a bundle from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse bundle JSON")
    }

    /// Save the bundle to disk as UTF-8 JSON
    pub async fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
        }

        let content = self.to_json()?;
        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write bundle: {}", path.display()))?;

        Ok(())
    }

    /// Load a bundle previously written by [`ResultBundle::save`]
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read bundle: {}", path.display()))?;

        Self::from_json(&content)
            .with_context(|| format!("Invalid bundle file: {}", path.display()))
    }

    /// Load a bundle if the file exists, otherwise start a new one
    pub async fn load_or_new(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path).await
        } else {
            Ok(Self::new())
        }
    }
}
