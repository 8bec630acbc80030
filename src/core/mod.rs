//! Core orchestration logic.
//!
//! This module contains:
//! - Outcome: fetch-with-fallback policy per category
//! - Aggregator: runs every category and assembles the bundle

pub mod aggregator;
pub mod outcome;

// Re-export commonly used types
pub use aggregator::{Aggregator, CategoryReport};
pub use outcome::{fetch_with_fallback, FetchOutcome, Source};
