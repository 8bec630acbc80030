//! Facts adapter: random article summaries, one GET per fact.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio::time::sleep;

use super::{http, Category, FetchError, Fetcher};
use crate::domain::Fact;
use crate::fallback;

#[derive(Debug, Deserialize)]
struct SummaryPayload {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    #[serde(default)]
    desktop: Option<PageUrls>,
}

#[derive(Debug, Deserialize)]
struct PageUrls {
    #[serde(default)]
    page: Option<String>,
}

impl From<SummaryPayload> for Fact {
    fn from(p: SummaryPayload) -> Self {
        let page = p
            .content_urls
            .and_then(|urls| urls.desktop)
            .and_then(|desktop| desktop.page)
            .unwrap_or_default();

        Fact::new(
            p.title.unwrap_or_default(),
            p.extract.unwrap_or_default(),
            page,
        )
    }
}

/// Fetches random article summaries one request at a time
pub struct FactsFetcher {
    client: Client,
    url: String,
    request_delay: Duration,
}

impl FactsFetcher {
    pub fn new(client: Client, url: impl Into<String>, request_delay: Duration) -> Self {
        Self {
            client,
            url: url.into(),
            request_delay,
        }
    }
}

#[async_trait]
impl Fetcher for FactsFetcher {
    type Record = Fact;

    fn category(&self) -> Category {
        Category::Facts
    }

    async fn fetch_live(&self, count: usize) -> Result<Vec<Fact>, FetchError> {
        let mut facts = Vec::with_capacity(count);

        for i in 0..count {
            if i > 0 {
                sleep(self.request_delay).await;
            }
            let payload: SummaryPayload =
                http::get_json(self.client.get(&self.url), &self.url).await?;
            facts.push(payload.into());
        }

        Ok(facts)
    }

    fn fallback(&self) -> Option<Vec<Fact>> {
        Some(fallback::facts())
    }
}
