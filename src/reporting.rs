// src/reporting.rs
//! Console output and JSON serialization for score reports.

use crate::error::{KgError, Result};
use crate::types::SrsReport;
use colored::Colorize;
use std::fs;
use std::path::Path;

/// Prints a formatted score summary to stdout.
pub fn print_report(report: &SrsReport, verbose: bool) {
    println!("{}", "Semantic Retention Score".bold());
    for (name, value) in report.present_metrics() {
        println!("  {:<4} {value:.6}", name.dimmed());
    }
    if report.rtf.is_none() {
        println!("  {:<4} {}", "RTF".dimmed(), "absent (weight redistributed)".dimmed());
    }
    println!("  {:<4} {}", "SRS".bold(), format!("{:.6}", report.srs).green().bold());

    if verbose {
        print_counts(report);
    }
}

fn print_counts(report: &SrsReport) {
    let c = &report.counts;
    println!();
    println!(
        "{} {} concepts, {} units, {} periods, {} edges",
        "graph:".dimmed(),
        c.concepts,
        c.units,
        c.periods,
        c.total_edges()
    );
    for (edge_type, count) in &c.edges_by_type {
        println!("  {edge_type:<14} {count}");
    }
}

/// Writes the full report as pretty-printed JSON.
///
/// # Errors
/// Returns an error if serialization or the file write fails.
pub fn write_report(path: &Path, report: &SrsReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(|source| KgError::Io {
        source,
        path: path.to_path_buf(),
    })
}
