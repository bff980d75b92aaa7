//! Structured error types for the symbol tools
//!
//! Using thiserror for automatic Display implementation and error chaining.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SymbolError {
    #[error("Invalid {field} value '{value}' in dump line: {line}")]
    InvalidNumber { field: &'static str, value: String, line: String },

    #[error("Failed to run {tool}: {error}")]
    ToolLaunchFailed { tool: String, error: std::io::Error },

    #[error("{tool} exited with {status}: {stderr}")]
    ToolFailed { tool: String, status: std::process::ExitStatus, stderr: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum SymbolMapError {
    #[error("Binary not found: {0}")]
    BinaryNotFound(String),

    #[error("Address {0} does not fit in a 32-bit symbol map")]
    AddressOutOfRange(String),

    #[error("Invalid address '{0}' in nm output")]
    InvalidAddress(String),

    #[error("Symbol name too long for map record ({0} bytes)")]
    NameTooLong(usize),

    #[error("Truncated symbol map record at offset {0}")]
    TruncatedRecord(usize),

    #[error("Symbol name at offset {0} is not valid UTF-8")]
    InvalidName(usize),

    #[error(transparent)]
    Symbols(#[from] SymbolError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
