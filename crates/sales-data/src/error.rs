// File: crates/sales-data/src/error.rs
// Summary: Error taxonomies for ingestion and store reads.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Terminal ingest failures. Nothing here is retried; the caller reports the
/// message and any previously published tables stay untouched.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("sales file not found: {0}")]
    NotFound(PathBuf),
    #[error("sales file contains no data rows")]
    EmptyInput,
    #[error("required column '{0}' is missing from the sales file")]
    MissingColumn(&'static str),
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("malformed sales file: {0}")]
    Csv(#[from] csv::Error),
    #[error("sales database error: {0}")]
    Store(#[from] rusqlite::Error),
    #[error("could not read sales file: {0}")]
    Io(io::Error),
}

/// Read-side store failures as seen by the chart layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The summary tables do not exist yet (no ingest has completed).
    #[error("sales data is not available yet")]
    DataUnavailable,
    #[error("sales database error: {0}")]
    Sql(#[from] rusqlite::Error),
}
