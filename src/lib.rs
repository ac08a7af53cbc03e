//! nim-callgrind
//!
//! Rewrites callgrind profiler traces, replacing Nim mangled symbol names
//! with readable signatures such as `newFoo(string, int) [module.file] []`.
//!
//! This crate provides the core implementation for the
//! `nim-callgrind` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! valgrind --tool=callgrind ./app
//! nim-callgrind callgrind.out.1234 callgrind.out.1234.demangled
//! ```
//!
//! ## Library use
//!
//! ```ignore
//! use nim_callgrind::demangle::SymbolTable;
//! use nim_callgrind::output::rewrite_line;
//! use nim_callgrind::parser::extract_function_symbols;
//!
//! let lines = ["fn=(1) newFoo_moduleZfile_123(NimStringV2)"];
//! let (table, _) = SymbolTable::build(extract_function_symbols(lines));
//! assert_eq!(
//!     rewrite_line(lines[0], &table),
//!     "fn=(1) newFoo(string) [module.file] []"
//! );
//! ```

pub mod commands;
pub mod demangle;
pub mod output;
pub mod parser;
pub mod utils;
