//! Social adapter: a group's "hot" JSON listing.
//!
//! Unlike the other adapters there is no fallback set; a failed fetch
//! yields no posts.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{http, Category, FetchError, Fetcher};
use crate::domain::SocialPost;

#[derive(Debug, Deserialize)]
struct Listing {
    data: Option<ListingData>,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Option<Vec<ListingChild>>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: PostData,
}

#[derive(Debug, Deserialize)]
struct PostData {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    score: Option<i64>,
    #[serde(default)]
    permalink: Option<String>,
}

/// Fetches the hot listing of one group
pub struct SocialFetcher {
    client: Client,
    base_url: String,
    link_prefix: String,
    group: String,
}

impl SocialFetcher {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        link_prefix: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            link_prefix: link_prefix.into(),
            group: group.into(),
        }
    }

    /// Listing URL without the query string
    pub fn listing_url(&self) -> String {
        format!(
            "{}/r/{}/hot.json",
            self.base_url.trim_end_matches('/'),
            self.group
        )
    }

    fn to_post(&self, data: PostData) -> SocialPost {
        SocialPost {
            title: data.title.unwrap_or_default(),
            author: data.author.unwrap_or_default(),
            score: data.score.unwrap_or(0),
            url: format!("{}{}", self.link_prefix, data.permalink.unwrap_or_default()),
            origin_group: self.group.clone(),
        }
    }
}

#[async_trait]
impl Fetcher for SocialFetcher {
    type Record = SocialPost;

    fn category(&self) -> Category {
        Category::SocialPosts
    }

    async fn fetch_live(&self, count: usize) -> Result<Vec<SocialPost>, FetchError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let url = self.listing_url();
        let request = self.client.get(&url).query(&[("limit", count)]);
        let listing: Listing = http::get_json(request, &url).await?;

        let children = listing
            .data
            .and_then(|d| d.children)
            .ok_or_else(|| FetchError::parse("listing has no data.children"))?;

        Ok(children
            .into_iter()
            .take(count)
            .map(|child| self.to_post(child.data))
            .collect())
    }

    fn fallback(&self) -> Option<Vec<SocialPost>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> SocialFetcher {
        SocialFetcher::new(
            Client::new(),
            "https://www.reddit.com/",
            "https://reddit.com",
            "todayilearned",
        )
    }

    #[test]
    fn test_listing_url() {
        assert_eq!(
            fetcher().listing_url(),
            "https://www.reddit.com/r/todayilearned/hot.json"
        );
    }

    #[test]
    fn test_post_mapping_defaults() {
        let data: PostData =
            serde_json::from_str(r#"{"permalink": "/r/todayilearned/abc/"}"#).unwrap();
        let post = fetcher().to_post(data);

        assert_eq!(post.title, "");
        assert_eq!(post.score, 0);
        assert_eq!(post.url, "https://reddit.com/r/todayilearned/abc/");
        assert_eq!(post.origin_group, "todayilearned");
    }
}
