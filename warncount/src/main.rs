//! # warncount - Main Entry Point
//!
//! Prints the number of warnings in a build log as a single integer.

use anyhow::{Context, Result};
use clap::Parser;
use warncount::cli::Args;
use warncount::WarningScanner;

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
    let args = Args::parse();
    let log = args.log.as_ref().context(
        "Missing required argument: LOGFILE\n\n\
         Usage:\n  \
         warncount <logfile>",
    )?;

    let tally = WarningScanner::new()?.scan_file(log)?;
    println!("{}", tally.total());

    Ok(())
}
