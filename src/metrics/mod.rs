// src/metrics/mod.rs
//! Structural-fidelity metrics and their weighted composite (SRS).

pub mod composite;
pub mod structural;

use crate::config::Config;
use crate::graph::KnowledgeGraph;
use crate::types::SrsReport;
use std::collections::BTreeMap;

pub const METRIC_HP: &str = "HP";
pub const METRIC_ATP: &str = "AtP";
pub const METRIC_AP: &str = "AP";
pub const METRIC_RTF: &str = "RTF";

/// Computes all structural metrics over a loaded graph and combines them
/// into the composite report. `rtf` is an externally supplied value; when
/// absent its weight is redistributed over the present metrics.
#[must_use]
pub fn score_graph(graph: &KnowledgeGraph, rtf: Option<f64>, config: &Config) -> SrsReport {
    let hp = structural::hierarchy_presence(graph);
    let atp = structural::attribute_predictability(graph);
    let ap = structural::asymmetry_preservation(graph, &config.directional_types);

    // BTreeMap so the summation order is fixed: repeated runs must produce
    // bit-identical floats.
    let scores = BTreeMap::from([
        (METRIC_AP, Some(ap)),
        (METRIC_ATP, Some(atp)),
        (METRIC_HP, Some(hp)),
        (METRIC_RTF, rtf),
    ]);
    let srs = composite::weighted_srs(&scores, &config.weights);

    SrsReport {
        hp,
        atp,
        ap,
        rtf,
        srs,
        counts: graph.counts(),
    }
}
