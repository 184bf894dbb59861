//! Visit trace recording for the traverser.
//!
//! When [`TraverserConfig::trace`](crate::TraverserConfig::trace) is set, one
//! [`TraceEntry`] is recorded per processed visit, in dequeue order.

use serde::{Deserialize, Serialize};

use apigraph_core::NodeId;

use crate::flags::FlagState;

/// A single processed visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub node_id: NodeId,
    /// Distance from the entry node that seeded this path.
    pub depth: usize,
    /// Flags handed down by the parent.
    pub inherited: FlagState,
    /// Flags after this node's overrides; what its children receive.
    pub resolved: FlagState,
    /// Endpoint defined here, if the node is a route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
}
