//! # analyze - Main Entry Point
//!
//! Prints the symbols of a binary sorted by size, one per line:
//! `<address> <size> <type> <binding> <visibility> <name>`.

use analyze::cli::AnalyzeArgs;
use analyze::symbols::{build_report, readelf_symbols, write_report};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;

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

fn binary_path(args: &AnalyzeArgs) -> Result<&PathBuf> {
    args.binary.as_ref().context(
        "Missing required argument: BINARY\n\n\
         Usage:\n  \
         analyze <binary>\n\n\
         Run 'analyze --help' for more options",
    )
}

fn run() -> Result<()> {
    let args = AnalyzeArgs::parse();
    let binary = binary_path(&args)?;

    let dump = readelf_symbols(&args.readelf, binary)
        .with_context(|| format!("Failed to dump symbols of {}", binary.display()))?;
    let entries = build_report(&dump)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&mut out, &entries, args.limit).context("Failed to write report")?;

    Ok(())
}
