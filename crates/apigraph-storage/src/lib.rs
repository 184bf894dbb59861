//! Configuration loading for apigraph.
//!
//! Provides the [`GraphSource`] trait plus the [`FileSource`] and
//! [`InMemorySource`] backends. Everything here happens before traversal;
//! the only errors the pipeline can raise live in [`StorageError`].
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: GraphConfig, the decoded document
//! - [`traits`]: GraphSource trait and [`load_nodes`]
//! - [`file`]: FileSource implementation
//! - [`memory`]: InMemorySource implementation

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;
pub mod types;

pub use error::StorageError;
pub use file::FileSource;
pub use memory::InMemorySource;
pub use traits::{load_nodes, GraphSource};
pub use types::GraphConfig;
