// src/graph/loader.rs
//! Builds the in-memory graph from node and edge record sequences.

use crate::graph::{NODE_CONCEPT, NODE_PERIOD, NODE_UNIT};
use crate::types::{EdgeRecord, GraphCounts, NodeRecord};
use std::collections::{BTreeMap, HashSet};

/// The loaded graph: typed node id sets plus edges grouped by type.
///
/// Edge endpoints are not checked against the node sets; dangling
/// references are tolerated. Nodes with an unrecognized type are excluded
/// from the typed sets but still reachable through edges.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeGraph {
    concepts: HashSet<String>,
    units: HashSet<String>,
    periods: HashSet<String>,
    /// Per-type edge lists, input order preserved, duplicates kept.
    edges_by_type: BTreeMap<String, Vec<(String, String)>>,
    /// Every (src, type, dst) triple in input order.
    all_edges: Vec<(String, String, String)>,
}

impl KnowledgeGraph {
    #[must_use]
    pub fn from_records(
        nodes: impl IntoIterator<Item = NodeRecord>,
        edges: impl IntoIterator<Item = EdgeRecord>,
    ) -> Self {
        let mut graph = Self::default();
        for node in nodes {
            match node.node_type.as_str() {
                NODE_CONCEPT => graph.concepts.insert(node.node_id),
                NODE_UNIT => graph.units.insert(node.node_id),
                NODE_PERIOD => graph.periods.insert(node.node_id),
                _ => continue,
            };
        }
        for edge in edges {
            graph
                .edges_by_type
                .entry(edge.edge_type.clone())
                .or_default()
                .push((edge.src_id.clone(), edge.dst_id.clone()));
            graph.all_edges.push((edge.src_id, edge.edge_type, edge.dst_id));
        }
        graph
    }

    #[must_use]
    pub fn concepts(&self) -> &HashSet<String> {
        &self.concepts
    }

    #[must_use]
    pub fn units(&self) -> &HashSet<String> {
        &self.units
    }

    #[must_use]
    pub fn periods(&self) -> &HashSet<String> {
        &self.periods
    }

    /// Edges of one type, in input order. Empty slice for unknown types.
    #[must_use]
    pub fn edges_of_type(&self, edge_type: &str) -> &[(String, String)] {
        self.edges_by_type
            .get(edge_type)
            .map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn edges_by_type(&self) -> &BTreeMap<String, Vec<(String, String)>> {
        &self.edges_by_type
    }

    #[must_use]
    pub fn all_edges(&self) -> &[(String, String, String)] {
        &self.all_edges
    }

    /// Node and edge counts for the report's debug section.
    #[must_use]
    pub fn counts(&self) -> GraphCounts {
        GraphCounts {
            concepts: self.concepts.len(),
            units: self.units.len(),
            periods: self.periods.len(),
            edges_by_type: self
                .edges_by_type
                .iter()
                .map(|(t, es)| (t.clone(), es.len()))
                .collect(),
        }
    }
}
