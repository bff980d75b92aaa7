//! # warncount - build log warning counter
//!
//! Reads a kernel build log and prints how many compiler warnings it
//! contains, combining C compiler diagnostics (one line per warning) and
//! cargo's per-crate `generated N warnings` summaries.
//!
//! - [`scanner`]: line classification and the running tally
//! - [`cli`]: command-line argument parsing
//! - [`domain`]: error types

pub mod cli;
pub mod domain;
pub mod scanner;

pub use scanner::{WarningScanner, WarningTally, STOP_MARKER};
