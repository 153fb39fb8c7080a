// src/cli/handlers.rs
use crate::config::Config;
use crate::graph::snapshot;
use crate::metrics;
use crate::reporting;
use crate::taxonomy::{self, CyclePolicy};
use crate::types::TaxonomyEdge;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

pub struct ScoreArgs {
    pub snapshot: String,
    pub rtf: Option<f64>,
    pub out: Option<PathBuf>,
    pub verbose: bool,
}

pub struct ClosureArgs {
    pub inputs: Vec<PathBuf>,
    pub out: PathBuf,
    pub strict: bool,
}

/// Loads a snapshot, scores it, and prints (optionally writes) the report.
///
/// # Errors
/// Returns error if the snapshot is missing or malformed, or the report
/// cannot be written.
pub fn handle_score(args: ScoreArgs, config: &Config) -> Result<()> {
    let dir = snapshot::resolve(&args.snapshot)?;
    let graph = snapshot::load(&dir)?;
    let report = metrics::score_graph(&graph, args.rtf, config);

    reporting::print_report(&report, args.verbose);
    if let Some(path) = args.out {
        reporting::write_report(&path, &report)?;
        println!("{} {}", "wrote".dimmed(), path.display());
    }
    Ok(())
}

/// Merges taxonomy edge files, normalizes ids, and writes the input edges
/// enriched with their transitive ancestor closure.
///
/// # Errors
/// Returns error on missing/malformed input, a cycle under `--strict`, or
/// a failed write.
pub fn handle_closure(args: ClosureArgs, config: &Config) -> Result<()> {
    let raw = snapshot::load_taxonomy(&args.inputs)?;
    let direct = taxonomy::normalize_edges(&raw, &config.default_namespace);

    let policy = if args.strict {
        CyclePolicy::Error
    } else {
        config.cycle_policy
    };
    let closed = taxonomy::transitive_closure(&direct, policy)?;

    let edges: Vec<TaxonomyEdge> = closed
        .iter()
        .map(|(child, parent)| TaxonomyEdge::new(child.clone(), parent.clone()))
        .collect();
    snapshot::write_taxonomy(&args.out, &edges)?;

    println!(
        "{} direct={} closed={} -> {}",
        "taxonomy:".dimmed(),
        direct.len(),
        edges.len(),
        args.out.display()
    );
    Ok(())
}
