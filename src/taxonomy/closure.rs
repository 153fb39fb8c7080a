// src/taxonomy/closure.rs
//! Transitive ancestor closure over (child, parent) edges.
//!
//! Memoized depth-first ancestor collection: the same parent subgraph is
//! revisited across many children, so each node's ancestor set is computed
//! once. The input is assumed acyclic but not verified; an explicit
//! in-progress marker bounds traversal when that assumption fails.

use crate::error::{KgError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// What to do when a back-edge is found during ancestor collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    /// Treat the back-edge as contributing no additional ancestors.
    #[default]
    Break,
    /// Surface a `TaxonomyCycle` error naming the revisited node.
    Error,
}

/// Computes the closure of an edge set: the input edges plus every
/// non-reflexive transitive (child, ancestor) pair, deduplicated.
///
/// # Errors
/// Returns `TaxonomyCycle` under `CyclePolicy::Error` if the input is
/// cyclic.
pub fn transitive_closure(
    edges: &BTreeSet<(String, String)>,
    policy: CyclePolicy,
) -> Result<BTreeSet<(String, String)>> {
    ClosureBuilder::new(edges, policy).close()
}

/// One closure computation. The memo and in-progress caches live on the
/// builder, scoped to a single invocation.
pub struct ClosureBuilder {
    parents: BTreeMap<String, BTreeSet<String>>,
    input: BTreeSet<(String, String)>,
    memo: HashMap<String, BTreeSet<String>>,
    in_progress: HashSet<String>,
    policy: CyclePolicy,
}

impl ClosureBuilder {
    #[must_use]
    pub fn new(edges: &BTreeSet<(String, String)>, policy: CyclePolicy) -> Self {
        let mut parents: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (child, parent) in edges {
            parents.entry(child.clone()).or_default().insert(parent.clone());
        }
        Self {
            parents,
            input: edges.clone(),
            memo: HashMap::new(),
            in_progress: HashSet::new(),
            policy,
        }
    }

    /// Runs the closure. The result is a superset of the input edge set;
    /// no node is ever recorded as its own ancestor among the added pairs.
    ///
    /// # Errors
    /// Returns `TaxonomyCycle` under `CyclePolicy::Error`.
    pub fn close(mut self) -> Result<BTreeSet<(String, String)>> {
        let children: Vec<String> = self.parents.keys().cloned().collect();
        let mut out = self.input.clone();
        for child in children {
            for ancestor in self.ancestors(&child)? {
                if ancestor != child {
                    out.insert((child.clone(), ancestor));
                }
            }
        }
        Ok(out)
    }

    fn ancestors(&mut self, node: &str) -> Result<BTreeSet<String>> {
        if let Some(cached) = self.memo.get(node) {
            return Ok(cached.clone());
        }
        if self.in_progress.contains(node) {
            // Back-edge: this node is waiting on its own ancestor set.
            return match self.policy {
                CyclePolicy::Break => Ok(BTreeSet::new()),
                CyclePolicy::Error => Err(KgError::TaxonomyCycle {
                    node: node.to_string(),
                }),
            };
        }
        self.in_progress.insert(node.to_string());

        let direct: Vec<String> = self
            .parents
            .get(node)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        let mut acc = BTreeSet::new();
        for parent in direct {
            acc.insert(parent.clone());
            let inherited = self.ancestors(&parent)?;
            acc.extend(inherited);
        }

        self.in_progress.remove(node);
        self.memo.insert(node.to_string(), acc.clone());
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(list: &[(&str, &str)]) -> BTreeSet<(String, String)> {
        list.iter()
            .map(|(c, p)| ((*c).to_string(), (*p).to_string()))
            .collect()
    }

    #[test]
    fn test_three_level_chain() {
        let closed = transitive_closure(&edges(&[("A", "B"), ("B", "C")]), CyclePolicy::Break)
            .expect("acyclic");
        assert!(closed.contains(&("A".to_string(), "B".to_string())));
        assert!(closed.contains(&("B".to_string(), "C".to_string())));
        assert!(closed.contains(&("A".to_string(), "C".to_string())));
        for n in ["A", "B", "C"] {
            assert!(!closed.contains(&(n.to_string(), n.to_string())), "{n} is own ancestor");
        }
        assert_eq!(closed.len(), 3);
    }

    #[test]
    fn test_closure_is_superset_of_input() {
        let input = edges(&[("A", "B"), ("C", "D"), ("D", "E")]);
        let closed = transitive_closure(&input, CyclePolicy::Break).expect("acyclic");
        assert!(input.is_subset(&closed));
    }

    #[test]
    fn test_closure_is_idempotent() {
        let once = transitive_closure(
            &edges(&[("A", "B"), ("B", "C"), ("C", "D"), ("X", "C")]),
            CyclePolicy::Break,
        )
        .expect("acyclic");
        let twice = transitive_closure(&once, CyclePolicy::Break).expect("acyclic");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_diamond_shares_ancestor_computation() {
        // A -> B -> D, A -> C -> D: D's ancestors computed once, A sees
        // B, C, D exactly.
        let closed = transitive_closure(
            &edges(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]),
            CyclePolicy::Break,
        )
        .expect("acyclic");
        assert!(closed.contains(&("A".to_string(), "D".to_string())));
        assert_eq!(closed.len(), 5);
    }

    #[test]
    fn test_cycle_break_terminates() {
        let cases = vec![
            (vec![("A", "B"), ("B", "A")], "two-node cycle"),
            (vec![("A", "A")], "self loop"),
            (vec![("A", "B"), ("B", "C"), ("C", "A")], "three-node cycle"),
            (vec![("A", "B"), ("B", "C"), ("C", "B")], "cycle below the entry"),
        ];
        for (list, desc) in cases {
            let closed = transitive_closure(&edges(&list), CyclePolicy::Break)
                .unwrap_or_else(|_| panic!("break policy must not error: {desc}"));
            // Input preserved even when cyclic.
            assert!(edges(&list).is_subset(&closed), "{desc}");
        }
    }

    #[test]
    fn test_cycle_error_policy_names_a_node() {
        let err = transitive_closure(&edges(&[("A", "B"), ("B", "A")]), CyclePolicy::Error)
            .expect_err("cycle must error under strict policy");
        assert!(matches!(err, KgError::TaxonomyCycle { .. }));
    }

    #[test]
    fn test_acyclic_input_unaffected_by_policy() {
        let input = edges(&[("A", "B"), ("B", "C")]);
        let broke = transitive_closure(&input, CyclePolicy::Break).expect("acyclic");
        let strict = transitive_closure(&input, CyclePolicy::Error).expect("acyclic");
        assert_eq!(broke, strict);
    }

    #[test]
    fn test_empty_input() {
        let closed = transitive_closure(&BTreeSet::new(), CyclePolicy::Error).expect("empty");
        assert!(closed.is_empty());
    }
}
