//! JSON export of the symbol table.
//!
//! Writes the decoded symbols keyed by their raw text so a run can be
//! inspected or diffed without re-reading the trace.

use super::prepare_output_path;
use crate::demangle::SymbolTable;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a symbol table to a JSON file
///
/// **Public** - used by the demangle command for `--symbols`
///
/// # Arguments
/// * `table` - Symbol table to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_symbol_table(
    table: &SymbolTable,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing symbol table to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, table).map_err(OutputError::SerializationFailed)?;
    writer.flush()?;

    debug!("Symbol table written ({} symbols)", table.len());

    Ok(())
}

/// Read a symbol table back from a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_symbol_table(input_path: impl AsRef<Path>) -> Result<SymbolTable, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading symbol table from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let table = serde_json::from_reader(BufReader::new(file))
        .map_err(OutputError::SerializationFailed)?;

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_and_read_symbol_table() {
        let (table, _) = SymbolTable::build([
            "newFoo_moduleZfile_123(NimStringV2)",
            "eq_systemZstrs_3(NimStringV2, NimStringV2)[inline]",
        ]);
        let temp_file = NamedTempFile::new().unwrap();

        write_symbol_table(&table, temp_file.path()).unwrap();
        let loaded = read_symbol_table(temp_file.path()).unwrap();

        assert_eq!(loaded, table);
    }

    #[test]
    fn test_json_keyed_by_raw_symbol() {
        let (table, _) = SymbolTable::build(["newFoo_moduleZfile_123(NimStringV2)"]);
        let temp_file = NamedTempFile::new().unwrap();

        write_symbol_table(&table, temp_file.path()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(temp_file.path()).unwrap()).unwrap();
        let entry = &value["newFoo_moduleZfile_123(NimStringV2)"];
        assert_eq!(entry["name"], "newFoo");
        assert_eq!(entry["module"], "module.file");
        assert_eq!(entry["params"][0], "string");
    }

    #[test]
    fn test_read_invalid_json() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "not json").unwrap();

        let result = read_symbol_table(temp_file.path());
        assert!(matches!(result, Err(OutputError::SerializationFailed(_))));
    }
}
