//! CLI argument definitions

use crate::symbols::{DEFAULT_NM, DEFAULT_READELF};
use clap::Parser;
use std::path::PathBuf;

/// `analyze` arguments.
///
/// The binary is optional at the clap level so a missing path is reported
/// with our own usage text and exit code.
#[derive(Parser)]
#[command(
    name = "analyze",
    about = "List the symbols of a binary, largest first",
    after_help = "\
EXAMPLES:
    analyze build/kernel.elf                           Full report
    analyze build/kernel.elf --limit 20                Twenty biggest symbols
    analyze build/kernel.elf --readelf i686-elf-readelf"
)]
pub struct AnalyzeArgs {
    /// Binary or object file to inspect
    #[arg(value_name = "BINARY")]
    pub binary: Option<PathBuf>,

    /// Symbol dump tool to run
    #[arg(long, value_name = "PATH", default_value = DEFAULT_READELF)]
    pub readelf: String,

    /// Print only the N largest symbols
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,
}

/// `symmap` arguments.
#[derive(Parser)]
#[command(
    name = "symmap",
    about = "Generate the kernel symbol map for a binary",
    after_help = "\
EXAMPLES:
    symmap build/kernel.elf                    Writes build/kernel.elf.map
    symmap build/kernel.elf -o ksyms.bin       Explicit output file"
)]
pub struct SymmapArgs {
    /// Kernel binary to read symbols from
    #[arg(value_name = "BINARY")]
    pub binary: Option<PathBuf>,

    /// Symbol listing tool to run
    #[arg(long, value_name = "PATH", default_value = DEFAULT_NM)]
    pub nm: String,

    /// Output file (defaults to <BINARY>.map)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
