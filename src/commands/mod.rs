//! CLI command implementations.
//!
//! Commands orchestrate the scanner, demangler and writers to perform user tasks.

pub mod demangle;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use demangle::{execute_demangle, validate_args};
pub use models::{DemangleArgs, RunSummary};
