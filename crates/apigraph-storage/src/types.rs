//! The on-disk configuration shape.

use serde::{Deserialize, Serialize};

use apigraph_core::Node;

/// Top-level configuration document: `{ "nodes": [ ... ] }`.
///
/// Unknown top-level keys (designer layout data, version stamps) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl GraphConfig {
    pub fn new(nodes: Vec<Node>) -> Self {
        GraphConfig { nodes }
    }
}
