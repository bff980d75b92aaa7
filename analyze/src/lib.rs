//! # analyze - symbol tooling for kernel builds
//!
//! Two small utilities that look at the symbols of a freshly built binary:
//!
//! - `analyze <binary>`: runs `readelf -CWs`, and prints every symbol sorted
//!   by size, largest first. Handy for spotting what bloats the kernel image.
//! - `symmap <binary>`: runs `nm -C -n` and writes `<binary>.map`, the compact
//!   table of text symbols the kernel embeds to name backtrace frames.
//!
//! ## Module Structure
//!
//! - [`symbols`]: dump tool invocation, row parsing and the size report
//! - [`symbol_map`]: map record extraction, encoding and lookups
//! - [`cli`]: command-line argument parsing
//! - [`domain`]: error types
//!
//! ## Typical Usage
//!
//! ```bash
//! analyze build/kernel.elf | head -20
//! symmap build/kernel.elf
//! ```

pub mod cli;
pub mod domain;
pub mod symbol_map;
pub mod symbols;
