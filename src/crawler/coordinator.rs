//! Crawl engine - main traversal logic
//!
//! The engine owns the visited set and the frontier, drives traversal
//! order, and wires together fetching, classification, persistence, link
//! extraction, and rate limiting. Every failure is contained to the single
//! address that produced it.

use crate::config::Config;
use crate::content::classify;
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchOutcome};
use crate::crawler::limiter::RateLimiter;
use crate::crawler::parser::extract_candidates;
use crate::output::CrawlStats;
use crate::state::PageState;
use crate::storage::FileStore;
use crate::url::parse_seed;
use crate::KumoError;
use reqwest::Client;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use url::Url;

/// The crawl engine
///
/// Shared mutable state is exactly the visited set and the frontier, both
/// owned here. The frontier is an explicit LIFO work-list processed by a
/// loop, so traversal is depth-first like the reference behavior but the
/// call stack stays bounded on deep or cyclic sites.
pub struct Crawler {
    config: Config,
    client: Client,
    store: FileStore,
    limiter: RateLimiter,
    visited: HashSet<String>,
    frontier: Vec<Url>,
    stats: CrawlStats,
}

impl Crawler {
    /// Creates a new crawl engine from a validated configuration
    ///
    /// The storage root and its category subdirectories are created here,
    /// before any network activity.
    pub fn new(config: Config) -> Result<Self, KumoError> {
        let store = FileStore::new(&config.output.root_dir)?;
        let client = build_http_client(&config.user_agent, config.crawler.fetch_timeout_secs)?;
        let limiter = RateLimiter::new(Duration::from_millis(config.crawler.rate_interval_millis));

        Ok(Self {
            config,
            client,
            store,
            limiter,
            visited: HashSet::new(),
            frontier: Vec::new(),
            stats: CrawlStats::default(),
        })
    }

    /// Runs a crawl from the given seed address
    ///
    /// An invalid seed aborts before any fetch. Per-URL failures are
    /// reported on stdout and the crawl continues; the run itself only
    /// fails on startup problems.
    pub async fn run(&mut self, seed: &str) -> Result<CrawlStats, KumoError> {
        let seed = parse_seed(seed)?;

        tracing::info!("Starting crawl from {}", seed);

        // Check-and-insert is atomic with enqueue: an address enters the
        // visited set at the moment it enters the frontier.
        self.visited.insert(seed.as_str().to_string());
        self.frontier.push(seed);

        let start = Instant::now();
        let deadline = self
            .config
            .crawler
            .crawl_deadline_secs
            .map(Duration::from_secs);

        while let Some(address) = self.frontier.pop() {
            if let Some(limit) = deadline {
                if start.elapsed() >= limit {
                    tracing::warn!(
                        "Crawl deadline of {:?} reached with {} addresses still queued",
                        limit,
                        self.frontier.len() + 1
                    );
                    break;
                }
            }

            self.process(&address).await;
        }

        self.stats.elapsed = start.elapsed();
        tracing::info!(
            "Crawl finished: {} pages fetched, {} files stored in {:?}",
            self.stats.pages_fetched,
            self.stats.files_stored,
            self.stats.elapsed
        );

        Ok(self.stats.clone())
    }

    /// Processes one address: fetch, classify, persist, extract, throttle
    ///
    /// The address is already in the visited set when it arrives here, so
    /// re-entrant discovery resolves to a single fetch.
    async fn process(&mut self, address: &Url) {
        tracing::debug!("{}: {}", PageState::Fetching, address);
        println!("Crawling: {}", address);

        self.stats.pages_fetched += 1;
        self.limiter.mark_fetch();

        match fetch_url(&self.client, address).await {
            FetchOutcome::Success {
                status,
                content_type,
                body,
            } => {
                tracing::debug!("Fetched {} ({}, {})", address, status, content_type);
                let state = self.persist_and_extract(address, &content_type, &body);
                debug_assert!(state.is_terminal());
                tracing::debug!("{}: {}", state, address);
            }

            FetchOutcome::HttpError { status } => {
                println!("Error: HTTP status {} - URL: {}", status, address);
                self.stats.http_failures += 1;
            }

            FetchOutcome::NetworkError { error, timed_out } => {
                println!("Error: {} - URL: {}", error, address);
                self.stats.network_failures += 1;
                if timed_out {
                    self.stats.timeouts += 1;
                }
            }
        }

        // Uniform pacing after every attempt, success or failure.
        self.limiter.throttle().await;
    }

    /// Stores a fetched resource and, for markup, enqueues its links
    ///
    /// Returns the terminal state of the address (Done or Failed). A store
    /// failure abandons the subtree: the state machine only reaches link
    /// extraction through Stored.
    fn persist_and_extract(&mut self, address: &Url, content_type: &str, body: &[u8]) -> PageState {
        let category = classify(address.path(), content_type);

        match self.store.store(category, address, body) {
            Ok(path) => {
                println!("Saved: {}", path.display());
                self.stats.files_stored += 1;
                tracing::debug!("{}: {}", PageState::Stored, address);
            }
            Err(e) => {
                println!("Error: {} - URL: {}", e, address);
                self.stats.store_failures += 1;
                return PageState::Failed;
            }
        }

        if !content_type.contains("html") {
            return PageState::Done;
        }

        let html = String::from_utf8_lossy(body);
        let candidates = extract_candidates(&html, address);
        self.stats.links_discovered += candidates.len() as u64;

        for candidate in candidates {
            // insert() returning true means this address was never seen:
            // mark visited and enqueue in one step.
            if self.visited.insert(candidate.as_str().to_string()) {
                tracing::debug!("{}: {}", PageState::Discovered, candidate);
                self.frontier.push(candidate);
                self.stats.links_enqueued += 1;
            }
        }

        tracing::debug!("{}: {}", PageState::LinksExtracted, address);
        PageState::Done
    }

    /// Number of addresses awaiting a fetch attempt
    pub fn frontier_size(&self) -> usize {
        self.frontier.len()
    }

    /// Number of distinct addresses ever admitted
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
