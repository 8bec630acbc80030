//! Jokes adapter: one GET per joke against a random-joke endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio::time::sleep;

use super::{http, Category, FetchError, Fetcher};
use crate::domain::{Joke, DEFAULT_JOKE_CATEGORY};
use crate::fallback;

/// Response body of the random-joke endpoint
#[derive(Debug, Deserialize)]
struct JokePayload {
    #[serde(default)]
    setup: Option<String>,
    #[serde(default)]
    punchline: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

impl From<JokePayload> for Joke {
    fn from(p: JokePayload) -> Self {
        Joke::new(
            p.setup.unwrap_or_default(),
            p.punchline.unwrap_or_default(),
            p.kind.unwrap_or_else(|| DEFAULT_JOKE_CATEGORY.to_string()),
        )
    }
}

/// Fetches jokes one request at a time
pub struct JokesFetcher {
    client: Client,
    url: String,
    request_delay: Duration,
}

impl JokesFetcher {
    pub fn new(client: Client, url: impl Into<String>, request_delay: Duration) -> Self {
        Self {
            client,
            url: url.into(),
            request_delay,
        }
    }
}

#[async_trait]
impl Fetcher for JokesFetcher {
    type Record = Joke;

    fn category(&self) -> Category {
        Category::Jokes
    }

    async fn fetch_live(&self, count: usize) -> Result<Vec<Joke>, FetchError> {
        let mut jokes = Vec::with_capacity(count);

        for i in 0..count {
            if i > 0 {
                sleep(self.request_delay).await;
            }
            let payload: JokePayload =
                http::get_json(self.client.get(&self.url), &self.url).await?;
            jokes.push(payload.into());
        }

        Ok(jokes)
    }

    fn fallback(&self) -> Option<Vec<Joke>> {
        Some(fallback::jokes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_defaults() {
        let payload: JokePayload = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        let joke: Joke = payload.into();

        assert_eq!(joke.setup, "");
        assert_eq!(joke.punchline, "");
        assert_eq!(joke.category, "general");
    }

    #[test]
    fn test_payload_full() {
        let payload: JokePayload = serde_json::from_str(
            r#"{"type":"programming","setup":"Knock knock","punchline":"Race condition","id":1}"#,
        )
        .unwrap();
        let joke: Joke = payload.into();

        assert_eq!(joke, Joke::new("Knock knock", "Race condition", "programming"));
    }
}
