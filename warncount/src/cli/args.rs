//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "warncount",
    about = "Count compiler warnings in a build log",
    after_help = "\
EXAMPLES:
    warncount build.log          Print the total warning count"
)]
pub struct Args {
    /// Build log to scan
    #[arg(value_name = "LOGFILE")]
    pub log: Option<PathBuf>,
}
