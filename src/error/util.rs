//! Utility functions for error handling
//!
//! Helpers that turn filesystem failures into [`InsightsError`] values
//! carrying the offending path.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{InsightsError, Result};

/// Safely open a dataset file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(InsightsError::io(
            path,
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found (needed for: {purpose})"),
            ),
        ));
    }

    if !path.is_file() {
        return Err(InsightsError::io(
            path,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("path is not a file (expected a file for: {purpose})"),
            ),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let source = match e.kind() {
            io::ErrorKind::PermissionDenied => io::Error::new(
                e.kind(),
                format!("permission denied while {purpose}; check file permissions"),
            ),
            _ => e,
        };
        InsightsError::io(path, source)
    })
}

/// Read a whole text file, attaching the path to any failure
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| InsightsError::io(path, e))
}
