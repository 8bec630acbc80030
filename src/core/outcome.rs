//! Fetch-with-fallback policy.
//!
//! Every live fetch produces an explicit `Result`. This module inspects
//! it and decides between accepting the live records, substituting a
//! random fallback sample, or reporting the category as unavailable.

use rand::thread_rng;
use tracing::{error, info, warn};

use crate::adapters::{Category, FetchError, Fetcher};
use crate::fallback;

/// Where the records of an outcome came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Live endpoint answered and parsed
    Live,
    /// Live fetch failed, records drawn from the bundled dataset
    Fallback,
    /// Live fetch failed and the category has no fallback
    Unavailable,
}

/// The result of one category fetch
#[derive(Debug, Clone)]
pub struct FetchOutcome<T> {
    pub category: Category,
    pub records: Vec<T>,
    pub source: Source,
    /// Error that made the live fetch fail
    pub error: Option<FetchError>,
}

/// Run a live fetch and resolve failures per the fetcher's fallback policy
pub async fn fetch_with_fallback<F: Fetcher>(
    fetcher: &F,
    count: usize,
) -> FetchOutcome<F::Record> {
    let category = fetcher.category();
    info!(%category, count, "Fetching");

    match fetcher.fetch_live(count).await {
        Ok(records) => {
            info!(%category, collected = records.len(), "Collected live records");
            FetchOutcome {
                category,
                records,
                source: Source::Live,
                error: None,
            }
        }
        Err(err) => resolve_failure(fetcher, count, err),
    }
}

fn resolve_failure<F: Fetcher>(
    fetcher: &F,
    count: usize,
    err: FetchError,
) -> FetchOutcome<F::Record> {
    let category = fetcher.category();

    match fetcher.fallback() {
        Some(pool) => {
            warn!(%category, error = %err, "Live fetch failed, using fallback data");
            let records = fallback::sample(&pool, count, &mut thread_rng());
            info!(%category, loaded = records.len(), "Loaded fallback records");
            FetchOutcome {
                category,
                records,
                source: Source::Fallback,
                error: Some(err),
            }
        }
        None => {
            error!(%category, error = %err, "Live fetch failed, no fallback available");
            FetchOutcome {
                category,
                records: Vec::new(),
                source: Source::Unavailable,
                error: Some(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Stub {
        live: Result<Vec<u32>, FetchError>,
        pool: Option<Vec<u32>>,
    }

    #[async_trait]
    impl Fetcher for Stub {
        type Record = u32;

        fn category(&self) -> Category {
            Category::Jokes
        }

        async fn fetch_live(&self, _count: usize) -> Result<Vec<u32>, FetchError> {
            self.live.clone()
        }

        fn fallback(&self) -> Option<Vec<u32>> {
            self.pool.clone()
        }
    }

    #[tokio::test]
    async fn test_live_records_accepted() {
        let stub = Stub {
            live: Ok(vec![1, 2]),
            pool: Some(vec![9]),
        };
        let outcome = fetch_with_fallback(&stub, 2).await;

        assert_eq!(outcome.source, Source::Live);
        assert_eq!(outcome.records, vec![1, 2]);
        assert!(outcome.error.is_none());
    }

    #[tokio::test]
    async fn test_failure_draws_from_pool() {
        let stub = Stub {
            live: Err(FetchError::parse("boom")),
            pool: Some(vec![10, 20, 30]),
        };
        let outcome = fetch_with_fallback(&stub, 5).await;

        assert_eq!(outcome.source, Source::Fallback);
        assert_eq!(outcome.records.len(), 3);
        let mut sorted = outcome.records.clone();
        sorted.sort();
        assert_eq!(sorted, vec![10, 20, 30]);
        assert_eq!(outcome.error, Some(FetchError::parse("boom")));
    }

    #[tokio::test]
    async fn test_failure_without_pool_is_empty() {
        let stub = Stub {
            live: Err(FetchError::Status {
                status: 429,
                url: "http://x".to_string(),
            }),
            pool: None,
        };
        let outcome = fetch_with_fallback(&stub, 5).await;

        assert_eq!(outcome.source, Source::Unavailable);
        assert!(outcome.records.is_empty());
    }
}
