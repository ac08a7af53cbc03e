//! Nim symbol demangling.
//!
//! This module handles:
//! - Classifying raw symbols as Nim mangled names
//! - Decoding names, module hints, parameters and attribute tags
//! - Building the symbol table used by the rewriter

pub mod classify;
pub mod decoder;
pub mod params;
pub mod table;

// Re-export main types
pub use classify::is_nim_mangled;
pub use decoder::{decode, DecodedSymbol};
pub use params::render_param;
pub use table::{SymbolTable, TableStats};
