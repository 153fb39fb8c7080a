// src/graph/mod.rs
//! Knowledge-graph loading: typed node sets and edges grouped by type.

pub mod loader;
pub mod snapshot;

pub use loader::KnowledgeGraph;

/// Hierarchical child-to-parent edge type.
pub const EDGE_IS_A: &str = "is-a";
/// Concept-to-unit attribute edge type.
pub const EDGE_MEASURED_IN: &str = "measured-in";
/// Concept-to-period edge type.
pub const EDGE_FOR_PERIOD: &str = "for-period";

/// Node types the scorer cares about. Other types are permitted in
/// snapshots and ignored.
pub const NODE_CONCEPT: &str = "Concept";
pub const NODE_UNIT: &str = "Unit";
pub const NODE_PERIOD: &str = "Period";
