//! Adapters for the external content sources.
//!
//! Each adapter knows one endpoint's access pattern and response shape.
//! Adapters only perform the live fetch and report an explicit outcome;
//! the fallback decision is made by the caller.

pub mod facts;
pub mod http;
pub mod jokes;
pub mod quotes;
pub mod social;

use async_trait::async_trait;
use thiserror::Error;

pub use facts::FactsFetcher;
pub use http::build_client;
pub use jokes::JokesFetcher;
pub use quotes::QuotesFetcher;
pub use social::SocialFetcher;

/// Content category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Quotes,
    Jokes,
    Facts,
    SocialPosts,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Quotes => write!(f, "quotes"),
            Category::Jokes => write!(f, "jokes"),
            Category::Facts => write!(f, "facts"),
            Category::SocialPosts => write!(f, "social_posts"),
        }
    }
}

/// Errors from a live fetch attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Timeout, connection failure or unreadable body
    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    /// Non-2xx response
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Expected field or markup missing, or malformed body
    #[error("Parse error: {0}")]
    Parse(String),
}

impl FetchError {
    pub(crate) fn network(url: &str, err: &reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out ({})", err)
        } else {
            err.to_string()
        };
        Self::Network {
            url: url.to_string(),
            message,
        }
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

/// A source of records for one category
#[async_trait]
pub trait Fetcher: Send + Sync {
    type Record: Clone + Send;

    /// Category this fetcher serves
    fn category(&self) -> Category;

    /// Fetch up to `count` records from the live endpoint
    async fn fetch_live(&self, count: usize) -> Result<Vec<Self::Record>, FetchError>;

    /// Local records to substitute on failure (`None` means no substitution)
    fn fallback(&self) -> Option<Vec<Self::Record>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Quotes.to_string(), "quotes");
        assert_eq!(Category::SocialPosts.to_string(), "social_posts");
    }

    #[test]
    fn test_fetch_error_messages() {
        let err = FetchError::Status {
            status: 503,
            url: "http://example.org".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503 from http://example.org");
        assert_eq!(
            FetchError::parse("no quote blocks").to_string(),
            "Parse error: no quote blocks"
        );
    }
}
