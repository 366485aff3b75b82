//! Crawler module for web page fetching and traversal
//!
//! This module contains the core crawling logic:
//! - HTTP fetching with an explicit tagged result
//! - Link extraction from markup
//! - Rate limiting between fetches
//! - The engine that owns the visited set and frontier

mod coordinator;
mod fetcher;
mod limiter;
mod parser;

pub use coordinator::Crawler;
pub use fetcher::{build_http_client, fetch_url, FetchOutcome};
pub use limiter::RateLimiter;
pub use parser::extract_candidates;

use crate::config::Config;
use crate::output::CrawlStats;
use crate::KumoError;

/// Runs a complete crawl from a seed address
///
/// This is the main entry point for a crawl. It will:
/// 1. Create the storage root and category subdirectories
/// 2. Build the HTTP client
/// 3. Traverse every reachable, admissible address at most once
/// 4. Return the run's tally
pub async fn crawl(config: Config, seed: &str) -> Result<CrawlStats, KumoError> {
    let mut crawler = Crawler::new(config)?;
    crawler.run(seed).await
}
