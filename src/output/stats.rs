//! End-of-run crawl summary
//!
//! Counters accumulated in memory by the crawl engine and printed once
//! the frontier drains.

use std::time::Duration;

/// Tally of one crawl run
#[derive(Debug, Clone, Default)]
pub struct CrawlStats {
    /// Fetch attempts made
    pub pages_fetched: u64,

    /// Files written to the store
    pub files_stored: u64,

    /// Fetches that failed with a non-success HTTP status
    pub http_failures: u64,

    /// Fetches that failed at the transport level
    pub network_failures: u64,

    /// Transport failures that were timeouts
    pub timeouts: u64,

    /// Store attempts that failed with an I/O error
    pub store_failures: u64,

    /// Candidate links found in markup (including duplicates)
    pub links_discovered: u64,

    /// Links admitted to the frontier (valid and unvisited)
    pub links_enqueued: u64,

    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl CrawlStats {
    /// Total failures of any kind
    pub fn total_failures(&self) -> u64 {
        self.http_failures + self.network_failures + self.store_failures
    }
}

/// Prints a formatted summary to stdout
pub fn print_summary(stats: &CrawlStats) {
    println!();
    println!("=== Crawl Summary ===");
    println!("  Pages fetched:    {}", stats.pages_fetched);
    println!("  Files stored:     {}", stats.files_stored);
    println!("  Links discovered: {}", stats.links_discovered);
    println!("  Links enqueued:   {}", stats.links_enqueued);

    if stats.total_failures() > 0 {
        println!("  Failures:         {}", stats.total_failures());
        if stats.http_failures > 0 {
            println!("    HTTP errors:    {}", stats.http_failures);
        }
        if stats.network_failures > 0 {
            println!(
                "    Network errors: {} ({} timeouts)",
                stats.network_failures, stats.timeouts
            );
        }
        if stats.store_failures > 0 {
            println!("    Store errors:   {}", stats.store_failures);
        }
    }

    let success_rate = if stats.pages_fetched > 0 {
        (stats.files_stored as f64 / stats.pages_fetched as f64) * 100.0
    } else {
        0.0
    };
    println!(
        "  Success rate:     {:.1}% in {:.2?}",
        success_rate, stats.elapsed
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_failures() {
        let stats = CrawlStats {
            http_failures: 2,
            network_failures: 1,
            store_failures: 1,
            ..Default::default()
        };
        assert_eq!(stats.total_failures(), 4);
    }

    #[test]
    fn test_default_is_zeroed() {
        let stats = CrawlStats::default();
        assert_eq!(stats.pages_fetched, 0);
        assert_eq!(stats.total_failures(), 0);
    }
}
