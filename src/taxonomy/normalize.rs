// src/taxonomy/normalize.rs
//! Concept id normalization to `namespace:Name` form.

use crate::types::TaxonomyEdge;
use std::collections::BTreeSet;

/// Normalizes a concept id: trims whitespace and qualifies bare names with
/// the default namespace. Returns `None` for empty ids.
#[must_use]
pub fn normalize_concept(id: &str, default_namespace: &str) -> Option<String> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.contains(':') {
        Some(trimmed.to_string())
    } else {
        Some(format!("{default_namespace}:{trimmed}"))
    }
}

/// Normalizes a batch of taxonomy edges into a deduplicated (child, parent)
/// set, dropping rows with empty ids and self-loops.
#[must_use]
pub fn normalize_edges(
    edges: &[TaxonomyEdge],
    default_namespace: &str,
) -> BTreeSet<(String, String)> {
    let mut out = BTreeSet::new();
    for edge in edges {
        let (Some(child), Some(parent)) = (
            normalize_concept(&edge.child, default_namespace),
            normalize_concept(&edge.parent, default_namespace),
        ) else {
            continue;
        };
        if child == parent {
            continue;
        }
        out.insert((child, parent));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_name_gets_default_namespace() {
        assert_eq!(
            normalize_concept("Assets", "us-gaap").as_deref(),
            Some("us-gaap:Assets")
        );
    }

    #[test]
    fn test_qualified_name_kept_as_is() {
        assert_eq!(
            normalize_concept("ifrs:Revenue", "us-gaap").as_deref(),
            Some("ifrs:Revenue")
        );
    }

    #[test]
    fn test_whitespace_trimmed_and_empty_rejected() {
        assert_eq!(
            normalize_concept("  Assets ", "us-gaap").as_deref(),
            Some("us-gaap:Assets")
        );
        assert_eq!(normalize_concept("   ", "us-gaap"), None);
    }

    #[test]
    fn test_edge_batch_drops_self_loops_and_duplicates() {
        let edges = vec![
            TaxonomyEdge::new("AssetsCurrent", "Assets"),
            TaxonomyEdge::new("us-gaap:AssetsCurrent", "us-gaap:Assets"),
            TaxonomyEdge::new("Assets", "Assets"),
            TaxonomyEdge::new("", "Assets"),
        ];
        let set = normalize_edges(&edges, "us-gaap");
        assert_eq!(set.len(), 1);
        assert!(set.contains(&(
            "us-gaap:AssetsCurrent".to_string(),
            "us-gaap:Assets".to_string()
        )));
    }
}
