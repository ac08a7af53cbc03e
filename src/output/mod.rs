//! Output writers for the demangled trace and the symbol table.
//!
//! This module handles writing data to disk:
//! - The rewritten callgrind trace
//! - JSON dumps of the decoded symbol table

pub mod json;
pub mod rewriter;

// Re-export main functions
pub use json::{read_symbol_table, write_symbol_table};
pub use rewriter::{rewrite, rewrite_line, write_demangled_trace, RewriteStats, Rewriter};

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Validate that an output path is writable and create missing parents
///
/// **Private** - shared by the trace and JSON writers
fn prepare_output_path(path: &Path) -> Result<(), OutputError> {
    validate_output_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
