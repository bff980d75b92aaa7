//! Domain model for warncount

pub mod errors;

pub use errors::ScanError;
