// src/metrics/structural.rs
//! The three deterministic coverage/consistency ratios.

use crate::graph::{EDGE_IS_A, EDGE_MEASURED_IN, KnowledgeGraph};
use std::collections::HashSet;

/// Attribute Predictability: share of Concept nodes that are the source of
/// at least one `measured-in` edge. 0.0 when there are no concepts.
#[must_use]
pub fn attribute_predictability(graph: &KnowledgeGraph) -> f64 {
    source_coverage(graph, EDGE_MEASURED_IN)
}

/// Hierarchy Presence: share of Concept nodes with at least one `is-a`
/// parent. 0.0 when there are no concepts.
#[must_use]
pub fn hierarchy_presence(graph: &KnowledgeGraph) -> f64 {
    source_coverage(graph, EDGE_IS_A)
}

#[allow(clippy::cast_precision_loss)]
fn source_coverage(graph: &KnowledgeGraph, edge_type: &str) -> f64 {
    let denom = graph.concepts().len();
    if denom == 0 {
        return 0.0;
    }
    let sources: HashSet<&str> = graph
        .edges_of_type(edge_type)
        .iter()
        .map(|(src, _)| src.as_str())
        .collect();
    let covered = graph
        .concepts()
        .iter()
        .filter(|c| sources.contains(c.as_str()))
        .count();
    covered as f64 / denom as f64
}

/// Asymmetry Preservation: over the directional edge types, the fraction of
/// edges whose exact reverse is NOT also present as an edge of the same
/// type. 1.0 (vacuously clean) when no directional edges exist.
///
/// Pairs are deduplicated within each type before counting; duplicates
/// across types count separately. Both members of a mutually-reversed pair
/// are counted as defects, so one symmetric pair costs 2.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn asymmetry_preservation(graph: &KnowledgeGraph, directional_types: &[String]) -> f64 {
    let mut total = 0usize;
    let mut defects = 0usize;
    for edge_type in directional_types {
        let pairs: HashSet<(&str, &str)> = graph
            .edges_of_type(edge_type)
            .iter()
            .map(|(s, d)| (s.as_str(), d.as_str()))
            .collect();
        for &(src, dst) in &pairs {
            total += 1;
            if pairs.contains(&(dst, src)) {
                defects += 1;
            }
        }
    }
    if total == 0 {
        return 1.0;
    }
    (1.0 - defects as f64 / total as f64).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EdgeRecord, NodeRecord};

    fn node(id: &str, t: &str) -> NodeRecord {
        NodeRecord {
            node_id: id.to_string(),
            node_type: t.to_string(),
        }
    }

    fn edge(src: &str, t: &str, dst: &str) -> EdgeRecord {
        EdgeRecord {
            src_id: src.to_string(),
            edge_type: t.to_string(),
            dst_id: dst.to_string(),
        }
    }

    fn directional() -> Vec<String> {
        vec!["measured-in".to_string(), "for-period".to_string()]
    }

    #[test]
    fn test_spec_scenario() {
        // C1, C2 concepts, U1 unit; one measured-in edge from C1.
        let graph = KnowledgeGraph::from_records(
            vec![node("C1", "Concept"), node("C2", "Concept"), node("U1", "Unit")],
            vec![edge("C1", "measured-in", "U1")],
        );
        assert!((attribute_predictability(&graph) - 0.5).abs() < f64::EPSILON);
        assert!((hierarchy_presence(&graph) - 0.0).abs() < f64::EPSILON);
        assert!((asymmetry_preservation(&graph, &directional()) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_concepts_yield_zero_not_nan() {
        let graph = KnowledgeGraph::from_records(vec![], vec![edge("X", "measured-in", "U")]);
        assert_eq!(attribute_predictability(&graph), 0.0);
        assert_eq!(hierarchy_presence(&graph), 0.0);
    }

    #[test]
    fn test_ap_fully_bidirectional_is_zero() {
        let graph = KnowledgeGraph::from_records(
            vec![],
            vec![
                edge("A", "measured-in", "B"),
                edge("B", "measured-in", "A"),
                edge("C", "for-period", "D"),
                edge("D", "for-period", "C"),
            ],
        );
        assert_eq!(asymmetry_preservation(&graph, &directional()), 0.0);
    }

    #[test]
    fn test_ap_reverse_in_other_type_is_not_a_defect() {
        // Reverse pair exists, but under a different edge type.
        let graph = KnowledgeGraph::from_records(
            vec![],
            vec![
                edge("A", "measured-in", "B"),
                edge("B", "for-period", "A"),
            ],
        );
        assert_eq!(asymmetry_preservation(&graph, &directional()), 1.0);
    }

    #[test]
    fn test_ap_symmetric_pair_costs_two() {
        // Three clean edges plus one symmetric pair: 5 distinct pairs,
        // 2 defects -> 1 - 2/5.
        let graph = KnowledgeGraph::from_records(
            vec![],
            vec![
                edge("A", "measured-in", "B"),
                edge("B", "measured-in", "A"),
                edge("C", "measured-in", "U1"),
                edge("D", "measured-in", "U1"),
                edge("E", "measured-in", "U2"),
            ],
        );
        let ap = asymmetry_preservation(&graph, &directional());
        assert!((ap - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_ap_duplicates_within_type_collapse() {
        // The same edge listed twice is one pair, not two.
        let graph = KnowledgeGraph::from_records(
            vec![],
            vec![
                edge("A", "measured-in", "B"),
                edge("A", "measured-in", "B"),
                edge("B", "measured-in", "A"),
            ],
        );
        // 2 distinct pairs, both defective.
        assert_eq!(asymmetry_preservation(&graph, &directional()), 0.0);
    }

    #[test]
    fn test_ap_no_directional_edges_is_vacuously_one() {
        let graph = KnowledgeGraph::from_records(
            vec![node("C1", "Concept")],
            vec![edge("C1", "is-a", "C2")],
        );
        assert_eq!(asymmetry_preservation(&graph, &directional()), 1.0);
    }

    #[test]
    fn test_metrics_stay_in_unit_interval() {
        let graph = KnowledgeGraph::from_records(
            vec![node("C1", "Concept"), node("C2", "Concept")],
            vec![
                edge("C1", "measured-in", "U1"),
                edge("C1", "is-a", "C2"),
                edge("C2", "measured-in", "U1"),
                edge("U1", "measured-in", "C2"),
            ],
        );
        for v in [
            attribute_predictability(&graph),
            hierarchy_presence(&graph),
            asymmetry_preservation(&graph, &directional()),
        ] {
            assert!((0.0..=1.0).contains(&v), "metric out of range: {v}");
        }
    }
}
