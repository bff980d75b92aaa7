//! Structured error types for warncount
//!
//! Using thiserror for automatic Display implementation and error chaining.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to open build log {path}: {source}")]
    OpenFailed { path: PathBuf, source: std::io::Error },

    #[error("Warning count '{count}' out of range on line {line_number}")]
    InvalidCount { count: String, line_number: usize },

    #[error("Invalid summary pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
