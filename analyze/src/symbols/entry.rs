//! One row of a `readelf -s` symbol table.

use crate::domain::SymbolError;
use std::fmt;

/// Placeholder printed for rows without a name column.
pub const UNKNOWN_SYMBOL: &str = "<unknown>";

/// `Num: Value Size Type Bind Vis Ndx`; the name column is optional.
const MIN_FIELDS: usize = 7;

/// Index of the first name field. Anything past it belongs to the same
/// demangled name.
const NAME_FIELD: usize = 7;

/// A parsed symbol table row.
///
/// Everything except `size` is kept as the dump tool printed it, so the
/// report reproduces the tool's own formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub address: String,
    pub size: u64,
    pub kind: String,
    pub binding: String,
    pub visibility: String,
    pub index: String,
    pub name: Option<String>,
}

impl SymbolEntry {
    /// Parse one dump line.
    ///
    /// Returns `Ok(None)` for blank lines, lines with too few columns and the
    /// `Num:` column header that precedes every table.
    ///
    /// # Errors
    /// Returns [`SymbolError::InvalidNumber`] if the size column is not a number.
    pub fn parse(line: &str) -> Result<Option<Self>, SymbolError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS || fields[0] == "Num:" {
            return Ok(None);
        }

        let size = parse_number(fields[2]).ok_or_else(|| SymbolError::InvalidNumber {
            field: "size",
            value: fields[2].to_string(),
            line: line.trim().to_string(),
        })?;

        // Demangled C++/Rust names may contain spaces
        let name = (fields.len() > NAME_FIELD).then(|| fields[NAME_FIELD..].join(" "));

        Ok(Some(Self {
            address: fields[1].to_string(),
            size,
            kind: fields[3].to_string(),
            binding: fields[4].to_string(),
            visibility: fields[5].to_string(),
            index: fields[6].to_string(),
            name,
        }))
    }

    /// Symbol name, or [`UNKNOWN_SYMBOL`] when the row had none.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_SYMBOL)
    }
}

impl fmt::Display for SymbolEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<8} {} {} {} {}",
            self.address,
            self.size,
            self.kind,
            self.binding,
            self.visibility,
            self.display_name()
        )
    }
}

/// Parse a numeric column: base 16 with a `0x` prefix, base 10 otherwise.
///
/// `readelf -W` switches to hex for sizes that do not fit its column.
#[must_use]
pub fn parse_number(text: &str) -> Option<u64> {
    match text.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}
