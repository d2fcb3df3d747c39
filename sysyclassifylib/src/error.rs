//! Error types for sysyclassifylib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading statistics or rendering the report
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// Failed to read the input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input is not a well-formed statistics document
    #[error("failed to parse statistics from {origin}: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },

    /// A statistics record has a counter of the wrong type
    #[error("invalid statistics for '{file}': {source}")]
    InvalidStat {
        file: String,
        source: serde_json::Error,
    },

    /// A statistics record lacks a counter a category reads
    #[error("statistics for '{file}' are missing field '{field}'")]
    FieldMissing { file: String, field: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
