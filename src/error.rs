// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KgError {
    #[error("missing input: {kind} not found at {path}")]
    MissingInput { kind: &'static str, path: PathBuf },

    #[error("malformed record in {path} at line {line}: {reason}")]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("taxonomy cycle detected at '{node}'")]
    TaxonomyCycle { node: String },

    #[error("invalid config: {0}")]
    Config(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KgError>;

// Allow `?` on std::io::Error by converting to KgError::Io with unknown path.
impl From<std::io::Error> for KgError {
    fn from(source: std::io::Error) -> Self {
        KgError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
