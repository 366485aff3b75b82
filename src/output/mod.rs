//! Output module for Kumo
//!
//! The only output beyond the stored files themselves is the console
//! contract (Crawling/Saved/Error lines, printed by the engine) and the
//! end-of-run summary here.

mod stats;

pub use stats::{print_summary, CrawlStats};
