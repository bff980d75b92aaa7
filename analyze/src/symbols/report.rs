//! Size-ordered symbol report
//!
//! Turns the text of a `readelf -CWs` dump into entries sorted by size, largest
//! first, and writes them one per line.

use super::entry::SymbolEntry;
use crate::domain::SymbolError;
use log::{debug, info};
use std::io::Write;

/// Leading dump lines that never carry symbols: a blank line, the
/// `Symbol table ... contains N entries:` banner and the column header.
const HEADER_LINES: usize = 3;

/// Parse a full dump, skipping its header.
///
/// # Errors
/// Returns an error on the first row whose size column is not a number.
pub fn parse_dump(dump: &str) -> Result<Vec<SymbolEntry>, SymbolError> {
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for line in dump.lines().skip(HEADER_LINES) {
        match SymbolEntry::parse(line)? {
            Some(entry) => entries.push(entry),
            None => skipped += 1,
        }
    }

    debug!("Parsed {} symbols, skipped {skipped} lines", entries.len());
    Ok(entries)
}

/// Sort by size, largest first. Ties keep dump order.
pub fn sort_by_size(entries: &mut [SymbolEntry]) {
    // slice::sort_by is stable
    entries.sort_by(|a, b| b.size.cmp(&a.size));
}

/// Parse and sort a dump in one step.
///
/// # Errors
/// See [`parse_dump`].
pub fn build_report(dump: &str) -> Result<Vec<SymbolEntry>, SymbolError> {
    let mut entries = parse_dump(dump)?;
    sort_by_size(&mut entries);

    if let Some(largest) = entries.first() {
        info!("Largest symbol: {} ({} bytes)", largest.display_name(), largest.size);
    }

    Ok(entries)
}

/// Write one formatted line per entry, at most `limit` lines.
///
/// # Errors
/// Returns an error if writing fails
pub fn write_report<W: Write>(
    out: &mut W,
    entries: &[SymbolEntry],
    limit: Option<usize>,
) -> std::io::Result<()> {
    let count = limit.map_or(entries.len(), |n| n.min(entries.len()));
    for entry in &entries[..count] {
        writeln!(out, "{entry}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = "\n\
Symbol table '.symtab' contains 6 entries:\n\
   Num:    Value  Size Type    Bind   Vis      Ndx Name\n\
     0: 00000000     0 NOTYPE  LOCAL  DEFAULT  UND \n\
     1: c0100000    16 FUNC    GLOBAL DEFAULT    1 _start\n\
     2: c0100010  4096 OBJECT  GLOBAL DEFAULT    3 kernel_stack\n\
     3: c0101010    16 FUNC    LOCAL  DEFAULT    1 outb\n\
     4: c0101020 0x2000 OBJECT GLOBAL DEFAULT    3 page_tables\n\
     5: c0103020   300 FUNC    GLOBAL DEFAULT    1 kmain\n";

    #[test]
    fn test_header_lines_are_discarded() {
        let entries = parse_dump(DUMP).unwrap();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].size, 0);
        assert_eq!(entries[0].name, None);
    }

    #[test]
    fn test_report_is_sorted_descending() {
        let entries = build_report(DUMP).unwrap();
        let sizes: Vec<u64> = entries.iter().map(|e| e.size).collect();
        assert_eq!(sizes, vec![0x2000, 4096, 300, 16, 16, 0]);
        assert!(entries.windows(2).all(|w| w[0].size >= w[1].size));
    }

    #[test]
    fn test_equal_sizes_keep_dump_order() {
        let entries = build_report(DUMP).unwrap();
        assert_eq!(entries[3].display_name(), "_start");
        assert_eq!(entries[4].display_name(), "outb");
    }

    #[test]
    fn test_write_report_formats_lines() {
        let entries = build_report(DUMP).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &entries, Some(2)).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "c0101020 8192     OBJECT GLOBAL DEFAULT page_tables\n\
             c0100010 4096     OBJECT GLOBAL DEFAULT kernel_stack\n"
        );
    }

    #[test]
    fn test_limit_larger_than_report() {
        let entries = build_report(DUMP).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &entries, Some(100)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 6);
    }

    #[test]
    fn test_dump_shorter_than_header() {
        assert!(parse_dump("\nSymbol table\n").unwrap().is_empty());
    }

    #[test]
    fn test_second_table_headers_are_noise() {
        let dump = format!(
            "{DUMP}\n\
             Symbol table '.dynsym' contains 1 entries:\n   \
             Num:    Value  Size Type    Bind   Vis      Ndx Name\n     \
             0: c0200000    8 FUNC    GLOBAL DEFAULT    1 extra\n"
        );
        let entries = parse_dump(&dump).unwrap();
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[6].display_name(), "extra");
    }
}
