//! The [`GraphSource`] trait: where a graph configuration comes from.
//!
//! Backends only decode; they never validate the graph itself. Rejecting an
//! empty node list is done once, in [`load_nodes`], for every backend.

use apigraph_core::Node;

use crate::error::StorageError;
use crate::types::GraphConfig;

/// A source of graph configurations.
pub trait GraphSource {
    /// Human-readable description for log lines and error messages.
    fn describe(&self) -> String;

    /// Reads and decodes the configuration.
    fn load(&self) -> Result<GraphConfig, StorageError>;
}

/// Loads the node list from `source`, rejecting an empty graph.
pub fn load_nodes(source: &dyn GraphSource) -> Result<Vec<Node>, StorageError> {
    let config = source.load()?;
    if config.nodes.is_empty() {
        tracing::warn!(source = %source.describe(), "configuration has no nodes");
        return Err(StorageError::EmptyGraph);
    }
    tracing::debug!(
        source = %source.describe(),
        nodes = config.nodes.len(),
        "loaded graph configuration"
    );
    Ok(config.nodes)
}
