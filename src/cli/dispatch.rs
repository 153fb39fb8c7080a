// src/cli/dispatch.rs
//! Maps parsed commands onto their handlers.

use super::args::Commands;
use super::handlers::{handle_closure, handle_score, ClosureArgs, ScoreArgs};
use crate::config::Config;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Score {
            snapshot,
            rtf,
            out,
            verbose,
        } => handle_score(
            ScoreArgs {
                snapshot,
                rtf,
                out,
                verbose,
            },
            config,
        ),
        Commands::Closure {
            inputs,
            out,
            strict,
        } => handle_closure(
            ClosureArgs {
                inputs,
                out,
                strict,
            },
            config,
        ),
    }
}
