//! Configuration module for Kumo
//!
//! Configuration comes from an optional TOML file merged with command-line
//! overrides. Every section has defaults, so a bare seed URL is enough to
//! run a crawl.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, OutputConfig, UserAgentConfig};
pub use validation::validate;
