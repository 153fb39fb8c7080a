// src/taxonomy/mod.rs
//! Taxonomy edge normalization and transitive ancestor closure.

pub mod closure;
pub mod normalize;

pub use closure::{transitive_closure, ClosureBuilder, CyclePolicy};
pub use normalize::{normalize_concept, normalize_edges};
