// src/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node record from a knowledge-graph snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub node_id: String,
    #[serde(rename = "type")]
    pub node_type: String,
}

/// An edge record from a knowledge-graph snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub src_id: String,
    pub edge_type: String,
    pub dst_id: String,
}

/// A child-to-parent taxonomy edge over namespaced concept ids.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaxonomyEdge {
    pub child: String,
    pub parent: String,
}

impl TaxonomyEdge {
    #[must_use]
    pub fn new(child: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            child: child.into(),
            parent: parent.into(),
        }
    }
}

/// Node and edge counts carried alongside metric values for debugging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphCounts {
    pub concepts: usize,
    pub units: usize,
    pub periods: usize,
    pub edges_by_type: BTreeMap<String, usize>,
}

impl GraphCounts {
    /// Total number of edges across all types.
    #[must_use]
    pub fn total_edges(&self) -> usize {
        self.edges_by_type.values().sum()
    }
}

/// The composite scoring result for one snapshot.
///
/// `rtf` is `None` unless an externally computed Relation Type Fidelity
/// value was supplied; the composite renormalizes over whatever is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SrsReport {
    pub hp: f64,
    pub atp: f64,
    pub ap: f64,
    pub rtf: Option<f64>,
    pub srs: f64,
    pub counts: GraphCounts,
}

impl SrsReport {
    /// Returns (name, value) pairs for every metric with a value,
    /// in a fixed order.
    #[must_use]
    pub fn present_metrics(&self) -> Vec<(&'static str, f64)> {
        let mut out = vec![("HP", self.hp), ("AtP", self.atp), ("AP", self.ap)];
        if let Some(rtf) = self.rtf {
            out.push(("RTF", rtf));
        }
        out
    }
}
