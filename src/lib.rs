pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod reporting;
pub mod taxonomy;
pub mod types;
