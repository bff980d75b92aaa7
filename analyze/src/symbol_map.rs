//! Kernel symbol map generation
//!
//! The kernel embeds a compact table of its text symbols so it can name the
//! functions in a backtrace. The table is a plain concatenation of records:
//!
//! ```text
//! ┌──────────────┬─────────┬──────────────────┐
//! │ address (LE) │ len: u8 │ name (len bytes) │
//! │   4 bytes    │ 1 byte  │      UTF-8       │
//! └──────────────┴─────────┴──────────────────┘
//! ```
//!
//! Records come from `nm -C -n`, so they are ordered by address.

use crate::domain::SymbolMapError;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Names longer than this are cut and suffixed with [`TRUNCATION_MARKER`].
pub const MAX_NAME_CHARS: usize = 64;

pub const TRUNCATION_MARKER: &str = "...";

const RECORD_HEADER_LEN: usize = 5;

/// One text symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapRecord {
    pub address: u32,
    pub name: String,
}

/// Collect the text symbols from `nm -C -n` output.
///
/// Lines look like `c0100000 T kmain`. Only `t`/`T` symbols are kept;
/// undefined symbols and anything with fewer than three fields is skipped.
///
/// # Errors
/// Returns an error if a text symbol's address is not hex or does not fit 32 bits
pub fn parse_nm(output: &str) -> Result<Vec<MapRecord>, SymbolMapError> {
    let mut records = Vec::new();

    for line in output.lines() {
        let mut fields = line.split_whitespace();
        let (Some(address), Some(kind)) = (fields.next(), fields.next()) else {
            continue;
        };
        if !kind.eq_ignore_ascii_case("t") {
            continue;
        }

        let name = fields.collect::<Vec<_>>().join(" ");
        if name.is_empty() {
            continue;
        }

        let wide = u64::from_str_radix(address, 16)
            .map_err(|_| SymbolMapError::InvalidAddress(address.to_string()))?;
        let address = u32::try_from(wide)
            .map_err(|_| SymbolMapError::AddressOutOfRange(format!("0x{wide:x}")))?;

        records.push(MapRecord { address, name: truncate_name(&name) });
    }

    debug!("Collected {} text symbols", records.len());
    Ok(records)
}

/// Longest name a record's length byte can describe.
const MAX_NAME_BYTES: usize = 255;

fn truncate_name(name: &str) -> String {
    if name.chars().count() <= MAX_NAME_CHARS && name.len() <= MAX_NAME_BYTES {
        return name.to_string();
    }

    // Leave room for the marker inside the length byte
    let budget = MAX_NAME_BYTES - TRUNCATION_MARKER.len();
    let mut short = String::with_capacity(budget + TRUNCATION_MARKER.len());
    for c in name.chars().take(MAX_NAME_CHARS) {
        if short.len() + c.len_utf8() > budget {
            break;
        }
        short.push(c);
    }
    short.push_str(TRUNCATION_MARKER);
    short
}

/// Serialize records into the on-disk map format.
///
/// # Errors
/// Returns an error if a name is longer than a length byte can describe
pub fn encode(records: &[MapRecord]) -> Result<Vec<u8>, SymbolMapError> {
    let capacity = records.iter().map(|r| RECORD_HEADER_LEN + r.name.len()).sum();
    let mut out = Vec::with_capacity(capacity);

    for record in records {
        let len =
            u8::try_from(record.name.len()).map_err(|_| SymbolMapError::NameTooLong(record.name.len()))?;
        out.extend_from_slice(&record.address.to_le_bytes());
        out.push(len);
        out.extend_from_slice(record.name.as_bytes());
    }

    Ok(out)
}

/// Default output location: the binary path with `.map` appended.
#[must_use]
pub fn map_path(binary: &Path) -> PathBuf {
    let mut path = binary.as_os_str().to_owned();
    path.push(".map");
    PathBuf::from(path)
}

/// A decoded symbol map, for lookups in either direction.
#[derive(Debug, Default)]
pub struct SymbolMap {
    records: Vec<MapRecord>,
}

impl SymbolMap {
    /// Decode a map file.
    ///
    /// # Errors
    /// Returns an error if the data ends inside a record or a name is not UTF-8
    pub fn decode(data: &[u8]) -> Result<Self, SymbolMapError> {
        let mut records = Vec::new();
        let mut offset = 0;

        while offset < data.len() {
            let header = data
                .get(offset..offset + RECORD_HEADER_LEN)
                .ok_or(SymbolMapError::TruncatedRecord(offset))?;
            let address = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
            let len = usize::from(header[4]);

            let start = offset + RECORD_HEADER_LEN;
            let name = data.get(start..start + len).ok_or(SymbolMapError::TruncatedRecord(offset))?;
            let name = std::str::from_utf8(name).map_err(|_| SymbolMapError::InvalidName(offset))?;

            records.push(MapRecord { address, name: name.to_string() });
            offset = start + len;
        }

        if !records.windows(2).all(|w| w[0].address <= w[1].address) {
            warn!("Symbol map is not ordered by address, address lookups may be wrong");
        }

        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[MapRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Address of the first symbol called `name`.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<u32> {
        self.records.iter().find(|r| r.name == name).map(|r| r.address)
    }

    /// Symbol containing `addr`: the last one starting at or below it, with
    /// the offset into that symbol.
    #[must_use]
    pub fn symbolize(&self, addr: u32) -> Option<(&str, u32)> {
        let idx = self.records.partition_point(|r| r.address <= addr);
        let record = self.records.get(idx.checked_sub(1)?)?;
        Some((record.name.as_str(), addr - record.address))
    }
}
