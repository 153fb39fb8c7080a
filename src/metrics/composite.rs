// src/metrics/composite.rs
//! Weighted combination of the available metrics.

use std::collections::BTreeMap;

/// Weighted mean over the metrics that have a value, with the weights of
/// the present metrics renormalized to sum to 1.
///
/// A metric missing from `weights` defaults to weight 1.0, so an empty
/// weight table degrades to an equal-weight average. If the configured
/// weights of the present metrics sum to zero, falls back to an
/// equal-weight average. Returns 0.0 when no metric is present.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn weighted_srs(
    scores: &BTreeMap<&'static str, Option<f64>>,
    weights: &BTreeMap<String, f64>,
) -> f64 {
    let avail: Vec<(&str, f64)> = scores
        .iter()
        .filter_map(|(name, value)| value.map(|v| (*name, v)))
        .collect();
    if avail.is_empty() {
        return 0.0;
    }

    let w: Vec<f64> = avail
        .iter()
        .map(|(name, _)| weights.get(*name).copied().unwrap_or(1.0))
        .collect();
    let wsum: f64 = w.iter().sum();

    if wsum == 0.0 {
        let equal = 1.0 / avail.len() as f64;
        return avail.iter().map(|(_, v)| v).sum::<f64>() * equal;
    }

    avail
        .iter()
        .zip(&w)
        .map(|((_, value), weight)| value * (weight / wsum))
        .sum()
}
