//! Aggregator for a full fetch run.
//!
//! Runs the four category fetchers in a fixed order with a politeness
//! pause between categories and assembles the result bundle. Individual
//! failures are absorbed by each category's fallback policy, so a run
//! always produces a bundle.

use anyhow::Result;
use reqwest::Client;
use tokio::time::sleep;
use tracing::{info, instrument};

use crate::adapters::{
    build_client, Category, FactsFetcher, FetchError, JokesFetcher, QuotesFetcher, SocialFetcher,
};
use crate::config::{Counts, Endpoints, ResolvedConfig, ThrottleSettings};
use crate::domain::{Fact, Joke, Quote, ResultBundle, SocialPost};

use super::outcome::{fetch_with_fallback, FetchOutcome, Source};

/// Per-category summary of an aggregation run
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub category: Category,
    pub source: Source,
    pub collected: usize,
    pub error: Option<FetchError>,
}

impl<T> From<&FetchOutcome<T>> for CategoryReport {
    fn from(outcome: &FetchOutcome<T>) -> Self {
        Self {
            category: outcome.category,
            source: outcome.source,
            collected: outcome.records.len(),
            error: outcome.error.clone(),
        }
    }
}

/// Orchestrates all category fetchers
pub struct Aggregator {
    quotes: QuotesFetcher,
    jokes: JokesFetcher,
    facts: FactsFetcher,
    social: SocialFetcher,
    client: Client,
    endpoints: Endpoints,
    throttle: ThrottleSettings,
}

impl Aggregator {
    /// Create an aggregator from resolved configuration
    pub fn new(config: &ResolvedConfig) -> Result<Self> {
        let client = build_client(&config.user_agent, config.throttle.request_timeout)?;
        let endpoints = &config.endpoints;
        let delay = config.throttle.request_delay;

        Ok(Self {
            quotes: QuotesFetcher::new(client.clone(), &endpoints.quotes),
            jokes: JokesFetcher::new(client.clone(), &endpoints.jokes, delay),
            facts: FactsFetcher::new(client.clone(), &endpoints.facts, delay),
            social: SocialFetcher::new(
                client.clone(),
                &endpoints.social_base,
                &endpoints.social_link_prefix,
                &config.social_group,
            ),
            client,
            endpoints: endpoints.clone(),
            throttle: config.throttle,
        })
    }

    /// Read a different social group, reusing the same HTTP client
    pub fn with_social_group(mut self, group: &str) -> Self {
        self.social = SocialFetcher::new(
            self.client.clone(),
            &self.endpoints.social_base,
            &self.endpoints.social_link_prefix,
            group,
        );
        self
    }

    pub async fn fetch_quotes(&self, count: usize) -> FetchOutcome<Quote> {
        fetch_with_fallback(&self.quotes, count).await
    }

    pub async fn fetch_jokes(&self, count: usize) -> FetchOutcome<Joke> {
        fetch_with_fallback(&self.jokes, count).await
    }

    pub async fn fetch_facts(&self, count: usize) -> FetchOutcome<Fact> {
        fetch_with_fallback(&self.facts, count).await
    }

    pub async fn fetch_social_posts(&self, count: usize) -> FetchOutcome<SocialPost> {
        fetch_with_fallback(&self.social, count).await
    }

    /// Fetch every category and return the bundle
    pub async fn fetch_all(&self, counts: Counts) -> ResultBundle {
        self.fetch_all_reported(counts).await.0
    }

    /// Fetch every category, also reporting where each category came from
    #[instrument(skip(self))]
    pub async fn fetch_all_reported(
        &self,
        counts: Counts,
    ) -> (ResultBundle, Vec<CategoryReport>) {
        info!("Starting aggregation run");
        let mut bundle = ResultBundle::new();
        let mut reports = Vec::with_capacity(4);

        let quotes = self.fetch_quotes(counts.quotes).await;
        reports.push(CategoryReport::from(&quotes));
        bundle.replace_quotes(quotes.records);
        sleep(self.throttle.category_delay).await;

        let jokes = self.fetch_jokes(counts.jokes).await;
        reports.push(CategoryReport::from(&jokes));
        bundle.replace_jokes(jokes.records);
        sleep(self.throttle.category_delay).await;

        let facts = self.fetch_facts(counts.facts).await;
        reports.push(CategoryReport::from(&facts));
        bundle.replace_facts(facts.records);
        sleep(self.throttle.category_delay).await;

        let posts = self.fetch_social_posts(counts.social_posts).await;
        reports.push(CategoryReport::from(&posts));
        bundle.replace_social_posts(posts.records);

        bundle.refresh_stats();
        info!(
            quotes = bundle.stats.total_quotes,
            jokes = bundle.stats.total_jokes,
            facts = bundle.stats.total_facts,
            social_posts = bundle.stats.total_reddit_posts,
            "Aggregation complete"
        );

        (bundle, reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoints;

    fn unreachable_config() -> ResolvedConfig {
        ResolvedConfig {
            // Port 9 (discard) on loopback refuses connections
            endpoints: Endpoints::rooted_at("http://127.0.0.1:9"),
            throttle: ThrottleSettings::immediate(),
            ..ResolvedConfig::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_all_never_fails_offline() {
        let aggregator = Aggregator::new(&unreachable_config()).unwrap();
        let (bundle, reports) = aggregator.fetch_all_reported(Counts::default()).await;

        assert_eq!(bundle.quotes.len(), 5);
        assert_eq!(bundle.jokes.len(), 3);
        assert_eq!(bundle.facts.len(), 3);
        assert!(bundle.social_posts.is_empty());

        assert_eq!(bundle.stats.total_quotes, bundle.quotes.len());
        assert_eq!(bundle.stats.total_jokes, bundle.jokes.len());
        assert_eq!(bundle.stats.total_facts, bundle.facts.len());
        assert_eq!(bundle.stats.total_reddit_posts, 0);

        let sources: Vec<Source> = reports.iter().map(|r| r.source).collect();
        assert_eq!(
            sources,
            vec![
                Source::Fallback,
                Source::Fallback,
                Source::Fallback,
                Source::Unavailable
            ]
        );
        assert!(reports
            .iter()
            .all(|r| matches!(r.error, Some(FetchError::Network { .. }))));
    }
}
