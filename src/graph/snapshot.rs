// src/graph/snapshot.rs
//! File boundary for snapshot loading.
//!
//! A snapshot is a directory holding `kg_nodes.jsonl` and `kg_edges.jsonl`,
//! one JSON record per line. Malformed lines fail the load with the file
//! and 1-based line number rather than being skipped: silently dropping
//! records would make repeated runs incomparable.

use crate::error::{KgError, Result};
use crate::graph::KnowledgeGraph;
use crate::types::{EdgeRecord, NodeRecord, TaxonomyEdge};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub const NODES_FILE: &str = "kg_nodes.jsonl";
pub const EDGES_FILE: &str = "kg_edges.jsonl";

/// Resolves a snapshot argument: either a directory path as given, or a
/// snapshot name under `data/kg/`.
///
/// # Errors
/// Returns `MissingInput` if neither candidate is a directory.
pub fn resolve(snapshot: &str) -> Result<PathBuf> {
    let direct = PathBuf::from(snapshot);
    if direct.is_dir() {
        return Ok(direct);
    }
    let nested = Path::new("data").join("kg").join(snapshot);
    if nested.is_dir() {
        return Ok(nested);
    }
    Err(KgError::MissingInput {
        kind: "snapshot folder",
        path: direct,
    })
}

/// Loads a snapshot directory into a `KnowledgeGraph`.
///
/// # Errors
/// Returns `MissingInput` if either file is absent, `MalformedRecord` for
/// an unparseable line.
pub fn load(dir: &Path) -> Result<KnowledgeGraph> {
    let nodes_path = dir.join(NODES_FILE);
    let edges_path = dir.join(EDGES_FILE);
    if !nodes_path.is_file() {
        return Err(KgError::MissingInput {
            kind: "node records",
            path: nodes_path,
        });
    }
    if !edges_path.is_file() {
        return Err(KgError::MissingInput {
            kind: "edge records",
            path: edges_path,
        });
    }
    let nodes: Vec<NodeRecord> = read_jsonl(&nodes_path)?;
    let edges: Vec<EdgeRecord> = read_jsonl(&edges_path)?;
    Ok(KnowledgeGraph::from_records(nodes, edges))
}

/// Loads and concatenates taxonomy edge files in the order given.
///
/// # Errors
/// Returns `MissingInput` for an absent file, `MalformedRecord` for an
/// unparseable line.
pub fn load_taxonomy(paths: &[PathBuf]) -> Result<Vec<TaxonomyEdge>> {
    let mut edges = Vec::new();
    for path in paths {
        if !path.is_file() {
            return Err(KgError::MissingInput {
                kind: "taxonomy edges",
                path: path.clone(),
            });
        }
        edges.extend(read_jsonl::<TaxonomyEdge>(path)?);
    }
    Ok(edges)
}

/// Reads a JSON Lines file into records. Blank lines are permitted;
/// anything else that fails to parse is a hard error.
fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = fs::read_to_string(path).map_err(|source| KgError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let mut records = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|e| KgError::MalformedRecord {
            path: path.to_path_buf(),
            line: idx + 1,
            reason: e.to_string(),
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Writes taxonomy edges as JSON Lines.
///
/// # Errors
/// Returns an error if serialization or the file write fails.
pub fn write_taxonomy(path: &Path, edges: &[TaxonomyEdge]) -> Result<()> {
    let mut out = String::new();
    for edge in edges {
        out.push_str(&serde_json::to_string(edge)?);
        out.push('\n');
    }
    fs::write(path, out).map_err(|source| KgError::Io {
        source,
        path: path.to_path_buf(),
    })
}
