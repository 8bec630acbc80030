//! inspire - Daily inspiration fetcher
//!
//! Fetches quotes, jokes, facts and social posts from public endpoints,
//! normalizes them into typed records and bundles them with summary stats.
//!
//! # Architecture
//!
//! Every category follows the same fetch-with-fallback policy:
//! - A live fetch returns an explicit `Result`
//! - On failure quotes, jokes and facts substitute a random sample of a
//!   bundled dataset, so consumers always get records
//! - Social posts have no fallback and come back empty instead
//!
//! # Modules
//!
//! - `adapters`: One fetcher per external endpoint
//! - `core`: Fallback policy and the Aggregator
//! - `domain`: Records, ResultBundle, query helpers, persistence
//! - `fallback`: Bundled datasets
//! - `config`: Endpoint, count and throttle configuration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Fetch everything and save scraped_data.json
//! inspire all
//!
//! # Search the saved bundle
//! inspire search-author jobs
//! inspire search-tag inspiration
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod fallback;

// Re-export main types at crate root for convenience
pub use adapters::{Category, FetchError, Fetcher};
pub use config::{Counts, Endpoints, ResolvedConfig, ThrottleSettings};
pub use crate::core::{Aggregator, CategoryReport, FetchOutcome, Source};
pub use domain::{Fact, Joke, Quote, ResultBundle, SocialPost, Stats};
