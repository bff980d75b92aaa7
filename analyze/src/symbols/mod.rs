//! Symbol table parsing and reporting
//!
//! - `dump`: run `readelf`/`nm` and capture their output
//! - `entry`: one parsed symbol table row
//! - `report`: the size-ordered listing printed by `analyze`

pub mod dump;
pub mod entry;
pub mod report;

pub use dump::{nm_symbols, readelf_symbols, DEFAULT_NM, DEFAULT_READELF};
pub use entry::{parse_number, SymbolEntry, UNKNOWN_SYMBOL};
pub use report::{build_report, parse_dump, sort_by_size, write_report};
