//! Build log scanning
//!
//! A build log mixes output from two toolchains:
//!
//! - C/assembly compilers print one diagnostic per warning, prefixed with the
//!   absolute source path: `/src/kernel/mm.c:42:5: warning: unused variable`
//! - cargo prints one summary per crate:
//!   ``warning: `noct-fs` (lib) generated 3 warnings``
//!
//! The first line of the log is a marker and is ignored. Scanning stops at the
//! first `+ Compiling` line, which starts the next build phase.

use crate::domain::ScanError;
use log::{debug, info};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Lines from here on belong to a later build phase.
pub const STOP_MARKER: &str = "+ Compiling";

const COMPILER_WARNING: &str = " warning: ";

const CARGO_SUMMARY: &str =
    r"^warning: `(?P<crate>\w.+)` \((?P<kind>\w+)\) generated (?P<count>[0-9]+) warning";

/// Warnings found so far, split by toolchain.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WarningTally {
    /// Single-line compiler diagnostics
    pub compiler: u64,
    /// Sum of cargo summary counts
    pub cargo: u64,
}

impl WarningTally {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.compiler.saturating_add(self.cargo)
    }
}

/// Classifies build log lines and accumulates a [`WarningTally`].
pub struct WarningScanner {
    summary: Regex,
}

impl WarningScanner {
    /// # Errors
    /// Returns an error if the summary pattern fails to compile
    pub fn new() -> Result<Self, ScanError> {
        Ok(Self { summary: Regex::new(CARGO_SUMMARY)? })
    }

    /// Compiler diagnostic: absolute path prefix and ` warning: ` anywhere.
    #[must_use]
    pub fn is_compiler_warning(line: &str) -> bool {
        line.starts_with('/') && line.contains(COMPILER_WARNING)
    }

    /// Parse a cargo summary line into `(crate, kind, count)`.
    ///
    /// # Errors
    /// Returns an error if the count does not fit `u64`
    pub fn cargo_summary<'a>(
        &self,
        line: &'a str,
        line_number: usize,
    ) -> Result<Option<(&'a str, &'a str, u64)>, ScanError> {
        let Some(caps) = self.summary.captures(line) else {
            return Ok(None);
        };

        let (Some(name), Some(kind), Some(count)) =
            (caps.name("crate"), caps.name("kind"), caps.name("count"))
        else {
            return Ok(None);
        };

        let parsed = count.as_str().parse().map_err(|_| ScanError::InvalidCount {
            count: count.as_str().to_string(),
            line_number,
        })?;

        Ok(Some((name.as_str(), kind.as_str(), parsed)))
    }

    /// Scan a whole log.
    ///
    /// Lines are decoded lossily so stray bytes in compiler output don't
    /// abort the count.
    ///
    /// # Errors
    /// Returns an error if reading fails or a summary count is out of range
    pub fn scan<R: BufRead>(&self, mut reader: R) -> Result<WarningTally, ScanError> {
        let mut tally = WarningTally::default();
        let mut buf = Vec::new();

        // Marker line
        reader.read_until(b'\n', &mut buf)?;

        let mut line_number = 1;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            let line = String::from_utf8_lossy(&buf);
            if line.starts_with(STOP_MARKER) {
                debug!("Stop marker on line {line_number}");
                break;
            }

            if Self::is_compiler_warning(&line) {
                debug!("line {line_number}: {}", line.trim_end());
                tally.compiler += 1;
            }

            if let Some((name, kind, count)) = self.cargo_summary(&line, line_number)? {
                debug!("line {line_number}: {name} ({kind}) generated {count}");
                tally.cargo = tally.cargo.saturating_add(count);
            }
        }

        info!(
            "Scanned {line_number} lines: {} compiler warnings, {} cargo warnings",
            tally.compiler, tally.cargo
        );
        Ok(tally)
    }

    /// Open and scan a log file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or scanning fails
    pub fn scan_file(&self, path: &Path) -> Result<WarningTally, ScanError> {
        let file = File::open(path)
            .map_err(|source| ScanError::OpenFailed { path: path.to_path_buf(), source })?;
        self.scan(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(log: &str) -> WarningTally {
        WarningScanner::new().unwrap().scan(log.as_bytes()).unwrap()
    }

    #[test]
    fn test_compiler_warnings_count_one_each() {
        let log = "+ make all\n\
                   /src/kernel/mm.c:10: warning: unused variable\n\
                   /src/kernel/mm.c:20: warning: unused variable\n\
                   /src/kernel/pci.c:7:3: warning: implicit declaration\n";
        let tally = scan(log);
        assert_eq!(tally.compiler, 3);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_cargo_summary_adds_count() {
        let tally = scan("marker\nwarning: `mycrate` (lib) generated 7 warnings\n");
        assert_eq!(tally, WarningTally { compiler: 0, cargo: 7 });
    }

    #[test]
    fn test_singular_summary() {
        assert_eq!(scan("marker\nwarning: `noct-fs` (lib) generated 1 warning\n").total(), 1);
    }

    #[test]
    fn test_summary_with_duplicate_note() {
        let log = "marker\nwarning: `pavi` (bin \"pavi\") generated 2 warnings\n\
                   warning: `noct-sched` (lib) generated 4 warnings (1 duplicate)\n";
        // `(bin "pavi")` is not a bare word
        assert_eq!(scan(log).total(), 4);
    }

    #[test]
    fn test_mixed_toolchains() {
        let log = "marker\n\
                   /src/a.c:1: warning: x\n\
                   warning: `kern` (lib) generated 5 warnings\n\
                   /src/b.c:2: warning: y\n";
        assert_eq!(scan(log).total(), 7);
    }

    #[test]
    fn test_first_line_is_never_counted() {
        assert_eq!(scan("/src/a.c:1: warning: x\n").total(), 0);
        assert_eq!(scan("").total(), 0);
    }

    #[test]
    fn test_stop_marker_ends_scan() {
        let log = "marker\n\
                   /src/a.c:1: warning: x\n\
                   + Compiling userspace\n\
                   /src/b.c:2: warning: y\n\
                   warning: `kern` (lib) generated 5 warnings\n";
        assert_eq!(scan(log).total(), 1);
    }

    #[test]
    fn test_stop_marker_must_start_the_line() {
        let log = "marker\n  + Compiling later\n/src/a.c:1: warning: x\n";
        assert_eq!(scan(log).total(), 1);
    }

    #[test]
    fn test_relative_paths_and_indented_summaries_are_ignored() {
        let log = "marker\n\
                   src/a.c:1: warning: x\n\
                   /src/a.c:1: note: warning:nothing\n  \
                   warning: `kern` (lib) generated 5 warnings\n";
        assert_eq!(scan(log).total(), 0);
    }

    #[test]
    fn test_non_utf8_lines_are_tolerated() {
        let mut log = b"marker\n/src/a.c:1: warning: bad \xff byte\n".to_vec();
        log.extend_from_slice(b"/src/b.c:2: warning: y\n");
        let tally = WarningScanner::new().unwrap().scan(log.as_slice()).unwrap();
        assert_eq!(tally.total(), 2);
    }

    #[test]
    fn test_count_overflow_is_an_error() {
        let log = "marker\nwarning: `kern` (lib) generated 99999999999999999999999 warnings\n";
        let err = WarningScanner::new().unwrap().scan(log.as_bytes()).unwrap_err();
        assert!(matches!(err, ScanError::InvalidCount { line_number: 2, .. }));
    }

    #[test]
    fn test_single_character_crate_name_is_not_a_summary() {
        let log = "marker\nwarning: `k` (lib) generated 5 warnings\n";
        assert_eq!(scan(log).total(), 0);
    }

    #[test]
    fn test_non_ascii_digits_do_not_abort_the_scan() {
        let log = "marker\n\
                   warning: `kern` (lib) generated \u{663} warnings\n\
                   /src/a.c:1: warning: x\n";
        assert_eq!(scan(log), WarningTally { compiler: 1, cargo: 0 });
    }

    #[test]
    fn test_cargo_summary_captures() {
        let scanner = WarningScanner::new().unwrap();
        let parsed = scanner.cargo_summary("warning: `noct-tty` (lib) generated 12 warnings", 1).unwrap();
        assert_eq!(parsed, Some(("noct-tty", "lib", 12)));
        assert_eq!(scanner.cargo_summary("warning: unused import", 1).unwrap(), None);
    }
}
