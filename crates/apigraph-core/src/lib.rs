//! Core data model for apigraph: node ids, nodes with their property bags,
//! and the built [`ApiGraph`] (node index + forward adjacency).

pub mod graph;
pub mod id;
pub mod node;

// Re-export commonly used types
pub use graph::ApiGraph;
pub use id::{Link, NodeId};
pub use node::{truthy, value_text, Node, NodeKind, Properties, ENTRY_TYPE, UNNAMED_ROUTE};
