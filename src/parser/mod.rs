//! Callgrind trace scanning.
//!
//! This module handles:
//! - Detecting function-context lines (`fn=` / `cfn=`)
//! - Extracting raw symbol text for the demangler

pub mod callgrind;

// Re-export main functions
pub use callgrind::{
    extract_function_symbols, extract_symbol, is_function_line, read_function_symbols,
    scan_function_symbols,
};
