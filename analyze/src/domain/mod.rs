//! Domain model for the symbol tools

pub mod errors;

pub use errors::{SymbolError, SymbolMapError};
