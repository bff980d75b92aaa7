//! Command-line interface definitions

mod args;

pub use args::Args;
