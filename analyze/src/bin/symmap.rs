//! # symmap - Main Entry Point
//!
//! Writes the kernel symbol map (`<binary>.map`) for a kernel binary.

use analyze::cli::SymmapArgs;
use analyze::domain::SymbolMapError;
use analyze::symbol_map::{encode, map_path, parse_nm};
use analyze::symbols::nm_symbols;
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            EXIT_ERROR
        }
    });
}

fn run() -> Result<()> {
    let args = SymmapArgs::parse();
    let binary = args.binary.as_ref().context(
        "Missing required argument: BINARY\n\n\
         Usage:\n  \
         symmap <binary> [-o <file>]",
    )?;

    if !binary.is_file() {
        return Err(SymbolMapError::BinaryNotFound(binary.display().to_string()).into());
    }

    let listing = nm_symbols(&args.nm, binary)
        .with_context(|| format!("Failed to list symbols of {}", binary.display()))?;
    let records = parse_nm(&listing)?;
    let bytes = encode(&records)?;

    let output = args.output.clone().unwrap_or_else(|| map_path(binary));
    fs::write(&output, &bytes).with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Wrote {} symbols ({} bytes) to {}", records.len(), bytes.len(), output.display());
    Ok(())
}
