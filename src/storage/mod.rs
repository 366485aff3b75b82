//! Persistence layer for fetched content
//!
//! Fetched bytes are written under a root directory with one fixed
//! subdirectory per storage category. Paths are derived deterministically
//! from the address, and re-storing the same address overwrites the file.

mod sink;

pub use sink::{derive_filename, FileStore};

use std::path::PathBuf;
use thiserror::Error;

/// Storage-specific errors
///
/// A storage failure is fatal to the single store attempt that produced
/// it; the crawl engine reports it and moves on.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
