// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kgscore", version, about = "Knowledge-graph structural fidelity scorer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute HP/AtP/AP and the composite SRS for a snapshot
    Score {
        /// Snapshot directory, or a snapshot name under data/kg/
        snapshot: String,
        /// Externally computed Relation Type Fidelity value
        #[arg(long)]
        rtf: Option<f64>,
        /// Write the full report as JSON
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
        /// Print per-type node and edge counts
        #[arg(long, short)]
        verbose: bool,
    },
    /// Enrich taxonomy edges with their transitive ancestor closure
    Closure {
        /// Taxonomy edge files (JSON Lines), merged in order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Output file for the enriched edge set
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
        /// Fail on taxonomy cycles instead of breaking them
        #[arg(long)]
        strict: bool,
    },
}
