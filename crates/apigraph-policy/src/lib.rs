//! Policy propagation for apigraph.
//!
//! Walks a built [`ApiGraph`](apigraph_core::ApiGraph) breadth-first from its
//! entry nodes, carrying per-path auth/admin flags, and produces a
//! [`Resolution`]: the merged [`RouteTable`] plus the process-wide
//! [`GlobalFlags`].
//!
//! # Modules
//!
//! - [`flags`] -- per-path [`FlagState`] and process-wide [`GlobalFlags`]
//! - [`routes`] -- [`RouteRecord`], the OR-merging [`RouteTable`]
//! - [`traverse`] -- the [`Traverser`] itself
//! - [`trace`] -- optional per-visit [`TraceEntry`] records

pub mod flags;
pub mod routes;
pub mod trace;
pub mod traverse;

pub use flags::{FlagState, GlobalFlags};
pub use routes::{is_public_endpoint, MergeOutcome, RouteRecord, RouteTable, PUBLIC_ENDPOINTS};
pub use trace::TraceEntry;
pub use traverse::{resolve, Resolution, Traverser, TraverserConfig};
