//! Error types for the loading boundary
//!
//! The analytics themselves are total functions and never fail. Only
//! reading configuration or replacement datasets from disk, and building
//! polars tables, can produce an error.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for fallible analytics operations
pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// File could not be read
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON did not match the expected schema
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration parsed but holds unusable values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Polars table construction or CSV export failed
    #[error("Table error: {0}")]
    Table(#[from] polars::prelude::PolarsError),
}
