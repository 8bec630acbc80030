//! Shared HTTP plumbing for the adapters.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::FetchError;

/// Build the HTTP client shared by all adapters
pub fn build_client(user_agent: &str, timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
        .context("Failed to build HTTP client")
}

/// Send a GET and return the body of a 2xx response
pub async fn get_text(request: RequestBuilder, url: &str) -> Result<String, FetchError> {
    debug!(%url, "GET");

    let response = request
        .send()
        .await
        .map_err(|e| FetchError::network(url, &e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::network(url, &e))
}

/// Send a GET and decode a JSON body
pub async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
    url: &str,
) -> Result<T, FetchError> {
    let body = get_text(request, url).await?;

    serde_json::from_str(&body)
        .map_err(|e| FetchError::parse(format!("invalid JSON from {}: {}", url, e)))
}
