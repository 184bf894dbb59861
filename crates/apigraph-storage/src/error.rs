//! Storage error types for apigraph-storage.
//!
//! [`StorageError`] covers every way loading a graph configuration can fail
//! before traversal starts.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading a graph configuration.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The configuration source does not exist.
    #[error("{} does not exist", path.display())]
    ConfigNotFound { path: PathBuf },

    /// The configuration decoded fine but contains no nodes.
    #[error("no nodes found in the configuration")]
    EmptyGraph,

    /// Reading the configuration failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
