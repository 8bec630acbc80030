//! Quotes adapter: scrapes one listing page of `div.quote` blocks.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};

use super::{http, Category, FetchError, Fetcher};
use crate::domain::Quote;
use crate::fallback;

/// Scrapes quotes from a single HTML listing page (no pagination)
pub struct QuotesFetcher {
    client: Client,
    url: String,
}

impl QuotesFetcher {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl Fetcher for QuotesFetcher {
    type Record = Quote;

    fn category(&self) -> Category {
        Category::Quotes
    }

    async fn fetch_live(&self, count: usize) -> Result<Vec<Quote>, FetchError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let html = http::get_text(self.client.get(&self.url), &self.url).await?;
        parse_quotes(&html, count)
    }

    fn fallback(&self) -> Option<Vec<Quote>> {
        Some(fallback::quotes())
    }
}

fn selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::parse(format!("bad selector {}: {:?}", css, e)))
}

fn first_text(block: &ElementRef<'_>, sel: &Selector) -> Option<String> {
    block
        .select(sel)
        .next()
        .map(|el| el.text().collect::<String>())
}

/// Extract the first `count` quote blocks in document order
pub fn parse_quotes(html: &str, count: usize) -> Result<Vec<Quote>, FetchError> {
    let document = Html::parse_document(html);

    let quote_sel = selector("div.quote")?;
    let text_sel = selector("span.text")?;
    let author_sel = selector("small.author")?;
    let tag_sel = selector("a.tag")?;

    let mut quotes = Vec::new();
    for (idx, block) in document.select(&quote_sel).take(count).enumerate() {
        let text = first_text(&block, &text_sel)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| FetchError::parse(format!("quote block {} has no text", idx)))?;
        let author = first_text(&block, &author_sel)
            .ok_or_else(|| FetchError::parse(format!("quote block {} has no author", idx)))?;
        let tags = block
            .select(&tag_sel)
            .map(|el| el.text().collect::<String>())
            .collect();

        quotes.push(Quote::new(text, author, tags));
    }

    if quotes.is_empty() {
        return Err(FetchError::parse("no quote blocks found on page"));
    }

    Ok(quotes)
}
