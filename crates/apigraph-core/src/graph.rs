//! ApiGraph: the id-indexed node set plus forward adjacency.
//!
//! [`ApiGraph::build`] is the Graph Builder. It takes the flat node list in
//! input order and produces three read-only structures:
//!
//! - a node index (`id -> Node`), last write wins on duplicate ids while the
//!   id keeps the slot of its first occurrence;
//! - forward adjacency (`parent id -> [child id]`), appended in the order
//!   edges are discovered, duplicates kept;
//! - the entry list, every indexed node classified as [`NodeKind::Entry`].
//!
//! Nothing is validated. A target id with no node is a dangling edge that
//! the traverser treats as a dead end; cycles are left in place.

use indexmap::IndexMap;

use crate::id::NodeId;
use crate::node::{Node, NodeKind};

/// The built API graph. Immutable once constructed.
#[derive(Debug, Clone, Default)]
pub struct ApiGraph {
    nodes: IndexMap<NodeId, Node>,
    children: IndexMap<NodeId, Vec<NodeId>>,
    entries: Vec<NodeId>,
}

impl ApiGraph {
    /// Builds the node index, adjacency, and entry list from raw nodes.
    pub fn build(nodes: Vec<Node>) -> Self {
        let mut index: IndexMap<NodeId, Node> = IndexMap::with_capacity(nodes.len());
        let mut children: IndexMap<NodeId, Vec<NodeId>> = IndexMap::new();

        for node in nodes {
            let targets = node.targets();
            if !targets.is_empty() {
                children
                    .entry(node.id.clone())
                    .or_default()
                    .extend(targets);
            }
            // IndexMap::insert keeps the original slot for an existing key.
            index.insert(node.id.clone(), node);
        }

        let entries: Vec<NodeId> = index
            .values()
            .filter(|node| node.kind() == NodeKind::Entry)
            .map(|node| node.id.clone())
            .collect();

        let graph = ApiGraph {
            nodes: index,
            children,
            entries,
        };
        tracing::debug!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            entries = graph.entries.len(),
            "built api graph"
        );
        graph
    }

    /// Looks up a node, `None` for dangling ids.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Child ids of `id` in edge discovery order. Empty for leaves and
    /// unknown ids.
    pub fn children(&self, id: &NodeId) -> &[NodeId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Entry node ids in index order.
    pub fn entries(&self) -> &[NodeId] {
        &self.entries
    }

    /// All indexed nodes in index order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// The raw adjacency mapping.
    pub fn adjacency(&self) -> &IndexMap<NodeId, Vec<NodeId>> {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of adjacency entries, dangling and duplicate edges included.
    pub fn edge_count(&self) -> usize {
        self.children.values().map(Vec::len).sum()
    }
}

impl FromIterator<Node> for ApiGraph {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        ApiGraph::build(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Properties;

    fn ids(raw: &[i64]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId::Num).collect()
    }

    #[test]
    fn adjacency_preserves_order_and_duplicates() {
        let graph = ApiGraph::build(vec![
            Node::new(1).with_targets([3, 2, 3]),
            Node::new(2).with_source(1).with_target(4),
            Node::new(3).with_source(1),
            Node::new(4).with_source(2),
        ]);

        assert_eq!(graph.children(&NodeId::Num(1)), ids(&[3, 2, 3]).as_slice());
        assert_eq!(graph.children(&NodeId::Num(2)), ids(&[4]).as_slice());
        assert!(graph.children(&NodeId::Num(3)).is_empty());
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn falsy_target_adds_no_edge() {
        let graph = ApiGraph::build(vec![Node::new(1).with_target(0)]);
        assert!(graph.children(&NodeId::Num(1)).is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn duplicate_ids_last_write_wins_first_slot_kept() {
        let graph = ApiGraph::build(vec![
            Node::new(1).with_name("first").with_target(2),
            Node::new(2).with_source(1),
            Node::new(1).with_name("second").with_target(3),
        ]);

        assert_eq!(graph.len(), 2);
        let node = graph.node(&NodeId::Num(1)).unwrap();
        assert_eq!(node.name.as_deref(), Some("second"));
        // Edges from both records are kept.
        assert_eq!(graph.children(&NodeId::Num(1)), ids(&[2, 3]).as_slice());
        // Node 1 still comes first in index order.
        let order: Vec<_> = graph.nodes().map(|n| n.id.clone()).collect();
        assert_eq!(order, ids(&[1, 2]));
    }

    #[test]
    fn entries_are_sourceless_or_typed_entry() {
        let graph = ApiGraph::build(vec![
            Node::new(1).with_source(9),
            Node::new(2),
            Node::new(3)
                .with_source(2)
                .with_properties(Properties::new().with("type", "entry")),
            Node::new(4).with_source(3),
        ]);
        assert_eq!(graph.entries(), ids(&[2, 3]).as_slice());
    }

    #[test]
    fn dangling_edges_are_kept_but_unresolvable() {
        let graph = ApiGraph::build(vec![Node::new(1).with_target(42)]);
        assert_eq!(graph.children(&NodeId::Num(1)), ids(&[42]).as_slice());
        assert!(graph.node(&NodeId::Num(42)).is_none());
        assert!(graph.children(&NodeId::Num(42)).is_empty());
    }

    #[test]
    fn empty_graph() {
        let graph = ApiGraph::build(Vec::new());
        assert!(graph.is_empty());
        assert!(graph.entries().is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn collect_from_iterator() {
        let graph: ApiGraph = (1i64..=3).map(Node::new).collect();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.entries().len(), 3);
    }
}
