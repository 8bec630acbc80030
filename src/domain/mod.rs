//! Domain types for the inspiration fetcher.
//!
//! This module contains the core data structures:
//! - Records: Quote, Joke, Fact, SocialPost
//! - ResultBundle: one aggregation run plus its stats

pub mod bundle;
pub mod records;

// Re-export commonly used types
pub use bundle::{ResultBundle, Stats, DEFAULT_BUNDLE_FILE};
pub use records::{Fact, Joke, Quote, SocialPost, DEFAULT_JOKE_CATEGORY};
