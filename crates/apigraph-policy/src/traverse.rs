//! Breadth-first policy propagation from entry nodes to route nodes.
//!
//! Every entry node seeds a path with [`FlagState::PUBLIC`]. Each dequeued
//! visit runs the same steps:
//!
//! 1. look the node up (a dangling id is a dead end);
//! 2. raise global CORS/logging flags from its properties;
//! 3. apply its `auth_required` / `admin_required` overrides;
//! 4. if it declares `endpoint` + `method`, insert or OR-merge a route;
//! 5. enqueue each child with its own copy of the resolved flags.
//!
//! All visits at depth `k` are processed before any at depth `k + 1`.
//!
//! A visit's effects depend only on `(node, inherited flags)`. Reprocessing
//! such a pair changes nothing: route merges are ORs, globals are monotonic,
//! and its children would be repeated pairs as well. The traverser therefore
//! skips pairs it has already seen, which leaves results on acyclic graphs
//! untouched and bounds cyclic graphs to four visits per node.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use apigraph_core::{ApiGraph, NodeId};

use crate::flags::{FlagState, GlobalFlags};
use crate::routes::{is_public_endpoint, MergeOutcome, RouteRecord, RouteTable};
use crate::trace::TraceEntry;

/// Traversal knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraverserConfig {
    /// Skip `(node, inherited flags)` pairs already processed.
    pub dedup: bool,
    /// Hard cap on processed visits. Only useful with `dedup` off.
    pub max_visits: Option<usize>,
    /// Record a [`TraceEntry`] per processed visit.
    pub trace: bool,
}

impl Default for TraverserConfig {
    fn default() -> Self {
        TraverserConfig {
            dedup: true,
            max_visits: None,
            trace: false,
        }
    }
}

/// Read-only result of a traversal, handed to an emitter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub routes: RouteTable,
    pub globals: GlobalFlags,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<TraceEntry>,
    /// Set when `max_visits` stopped the walk before the queue drained.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
}

/// One pending visit.
#[derive(Debug, Clone)]
struct Visit {
    node_id: NodeId,
    flags: FlagState,
    depth: usize,
}

/// Policy-propagation traverser over a built [`ApiGraph`].
pub struct Traverser<'g> {
    graph: &'g ApiGraph,
    config: TraverserConfig,
    queue: VecDeque<Visit>,
    seen: HashSet<(NodeId, FlagState)>,
    routes: RouteTable,
    globals: GlobalFlags,
    trace: Vec<TraceEntry>,
    visits: usize,
}

impl<'g> Traverser<'g> {
    pub fn new(graph: &'g ApiGraph, config: TraverserConfig) -> Self {
        Traverser {
            graph,
            config,
            queue: VecDeque::new(),
            seen: HashSet::new(),
            routes: RouteTable::new(),
            globals: GlobalFlags::default(),
            trace: Vec::new(),
            visits: 0,
        }
    }

    /// Walks the whole graph and returns the resolved snapshot.
    pub fn run(mut self) -> Resolution {
        for entry in self.graph.entries() {
            self.queue.push_back(Visit {
                node_id: entry.clone(),
                flags: FlagState::PUBLIC,
                depth: 0,
            });
        }

        let mut truncated = false;
        while let Some(visit) = self.queue.pop_front() {
            if self.config.dedup && !self.seen.insert((visit.node_id.clone(), visit.flags)) {
                continue;
            }
            if self
                .config
                .max_visits
                .is_some_and(|limit| self.visits >= limit)
            {
                tracing::warn!(
                    limit = self.visits,
                    pending = self.queue.len() + 1,
                    "visit limit reached, stopping traversal"
                );
                truncated = true;
                break;
            }
            self.visits += 1;
            self.visit(visit);
        }

        tracing::debug!(
            visits = self.visits,
            routes = self.routes.len(),
            cors = self.globals.cors,
            logging = self.globals.logging,
            "traversal finished"
        );

        Resolution {
            routes: self.routes,
            globals: self.globals,
            trace: self.trace,
            truncated,
        }
    }

    fn visit(&mut self, visit: Visit) {
        let graph = self.graph;
        let Some(node) = graph.node(&visit.node_id) else {
            tracing::trace!(node = %visit.node_id, "dangling edge, nothing to expand");
            return;
        };
        let props = &node.properties;

        self.globals.observe(props);

        // The node's own values win over the inherited ones, so the resolved
        // state is also what a route on this node applies.
        let resolved = visit.flags.overridden_by(props);

        let mut route = None;
        if let (Some(endpoint), Some(method)) = (props.text("endpoint"), props.text("method")) {
            let applied = if is_public_endpoint(&endpoint) {
                FlagState::PUBLIC
            } else {
                resolved
            };
            let record = RouteRecord::new(&method, node.display_name(), applied);
            let outcome = self.routes.insert_or_merge(&endpoint, record);
            tracing::trace!(
                node = %node.id,
                endpoint = %endpoint,
                auth = applied.auth,
                admin = applied.admin,
                merged = outcome == MergeOutcome::Merged,
                "resolved route"
            );
            route = Some(endpoint);
        }

        if self.config.trace {
            self.trace.push(TraceEntry {
                node_id: visit.node_id.clone(),
                depth: visit.depth,
                inherited: visit.flags,
                resolved,
                route,
            });
        }

        for child in graph.children(&visit.node_id) {
            self.queue.push_back(Visit {
                node_id: child.clone(),
                flags: resolved,
                depth: visit.depth + 1,
            });
        }
    }
}

/// Runs a traversal with the default configuration.
pub fn resolve(graph: &ApiGraph) -> Resolution {
    Traverser::new(graph, TraverserConfig::default()).run()
}
