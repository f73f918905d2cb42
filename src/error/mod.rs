//! Error handling for the job-insights engine.
//!
//! Only the loading boundary and selection validation can fail. Aggregations
//! themselves never return errors for missing data; they widen their filter or
//! produce empty views instead.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Specialized error type for loading and querying job-posting tables
#[derive(Debug, thiserror::Error)]
pub enum InsightsError {
    /// Error opening or reading a file
    #[error("IO error for {path}: {source}")]
    Io {
        /// Path that was being accessed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Error raised by an Arrow kernel or the CSV reader
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error processing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// A required column is missing or has an unusable type
    #[error("Schema error in column '{column}': {reason}")]
    Schema {
        /// Column name
        column: String,
        /// What is wrong with it
        reason: String,
    },

    /// The dataset file extension is not one we can read
    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// A selection names a skill, state or work type outside its domain
    #[error("Invalid {kind} selection: '{value}'")]
    InvalidSelection {
        /// Which control the selection came from
        kind: &'static str,
        /// The rejected value
        value: String,
    },

    /// Row conversion between Arrow and Rust structs failed
    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl InsightsError {
    /// Create a schema error for a column
    pub fn schema(column: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Schema {
            column: column.into(),
            reason: reason.into(),
        }
    }

    /// Create an IO error tied to a path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid-selection error
    pub fn invalid_selection(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidSelection {
            kind,
            value: value.into(),
        }
    }
}

impl From<serde_arrow::Error> for InsightsError {
    fn from(error: serde_arrow::Error) -> Self {
        Self::Conversion(error.to_string())
    }
}

impl From<serde_json::Error> for InsightsError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}

/// Result type for job-insights operations
pub type Result<T> = std::result::Result<T, InsightsError>;
