//! Error types for report generation.
//!
//! All variants are fatal: the pipeline is a one-shot batch transform with no
//! retries and no partial-write guarantees.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the report pipeline.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to read project document {}: {source}", path.display())]
    ReadDocument {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse project document {}: {source}", path.display())]
    ParseDocument {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to create artifact {}: {source}", path.display())]
    WriteArtifact {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
