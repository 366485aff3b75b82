//! Kumo: a polite web content harvester
//!
//! This crate implements a single-seed web crawler that fetches every page
//! reachable by hyperlink traversal at most once, classifies each fetched
//! resource by type, and persists the raw bytes to a deterministic on-disk
//! layout while pacing outbound requests.

pub mod config;
pub mod content;
pub mod crawler;
pub mod output;
pub mod state;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for Kumo operations
///
/// Per-URL fetch and store failures never appear here: the engine
/// contains them and keeps crawling. Only an invalid seed or a startup
/// problem fails a run.
#[derive(Debug, Error)]
pub enum KumoError {
    #[error("Invalid seed URL: {0}")]
    InvalidSeed(#[from] UrlError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Missing authority in URL: {0}")]
    MissingAuthority(String),
}

/// Result type alias for Kumo operations
pub type Result<T> = std::result::Result<T, KumoError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use content::{classify, Category};
pub use state::PageState;
pub use storage::FileStore;
pub use crate::url::{is_fetchable, parse_address, resolve};
