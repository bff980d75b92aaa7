//! Running external symbol dump tools

use crate::domain::SymbolError;
use log::debug;
use std::path::Path;
use std::process::Command;

/// Default dump tool; overridable for cross toolchains (`i686-elf-readelf`).
pub const DEFAULT_READELF: &str = "readelf";

/// Default `nm` used by the symbol map generator.
pub const DEFAULT_NM: &str = "nm";

/// `readelf` flags: demangle, wide output, symbol tables.
const READELF_ARGS: [&str; 3] = ["-C", "-W", "-s"];

/// `nm` flags: demangle, sort by address.
const NM_ARGS: [&str; 2] = ["-C", "-n"];

/// Dump the symbol tables of `binary` with `readelf`.
///
/// # Errors
/// Returns an error if the tool cannot be started or exits unsuccessfully
pub fn readelf_symbols(tool: &str, binary: &Path) -> Result<String, SymbolError> {
    run_tool(tool, &READELF_ARGS, binary)
}

/// List the symbols of `binary` with `nm`, sorted by address.
///
/// # Errors
/// Returns an error if the tool cannot be started or exits unsuccessfully
pub fn nm_symbols(tool: &str, binary: &Path) -> Result<String, SymbolError> {
    run_tool(tool, &NM_ARGS, binary)
}

fn run_tool(tool: &str, args: &[&str], binary: &Path) -> Result<String, SymbolError> {
    debug!("Running {tool} {} {}", args.join(" "), binary.display());

    let output = Command::new(tool)
        .args(args)
        .arg(binary)
        .output()
        .map_err(|error| SymbolError::ToolLaunchFailed { tool: tool.to_string(), error })?;

    if !output.status.success() {
        return Err(SymbolError::ToolFailed {
            tool: tool.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let text = String::from_utf8_lossy(&output.stdout).into_owned();
    debug!("{tool} produced {} lines", text.lines().count());
    Ok(text)
}
