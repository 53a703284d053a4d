//! Error types for the glossary pipeline.
//!
//! Every error is fatal: the first failure aborts the run and nothing is
//! retried or rolled back.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the glossary pipeline library.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Source file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file is not a valid chapter document.
    #[error("Invalid chapter JSON in {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A splitting rule points past the end of the source section list.
    #[error("Chapter {chapter}: section index {index} out of range ({available} sections available)")]
    SectionOutOfRange {
        chapter: u32,
        index: usize,
        available: usize,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
