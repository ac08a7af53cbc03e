//! Line scanner for callgrind traces.
//!
//! Callgrind names functions on lines such as `fn=(12) symbol` or
//! `cfn=symbol`. The scanner finds those lines and extracts the symbol text
//! so it can be classified and decoded before the rewrite pass.

use crate::utils::config::{FUNCTION_MARKERS, TAG_SEPARATOR};
use crate::utils::error::ParseError;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Check whether a line declares a function context
///
/// **Public** - shared by the scanner and the rewriter
///
/// A line qualifies when it contains a space and a `fn=` or `cfn=` marker.
pub fn is_function_line(line: &str) -> bool {
    if !line.contains(TAG_SEPARATOR) {
        return false;
    }

    FUNCTION_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Extract the raw symbol text from a single line
///
/// Returns `None` for lines that are not function-context lines.
/// The symbol is everything after the first space of the trimmed line.
pub fn extract_symbol(line: &str) -> Option<&str> {
    let line = line.trim();

    if !is_function_line(line) {
        return None;
    }

    line.split_once(TAG_SEPARATOR).map(|(_, symbol)| symbol)
}

/// Extract raw symbols from every function-context line
///
/// **Public** - main entry point for pass 1
///
/// File order is preserved and duplicates are kept; deduplication happens
/// when the symbols are used as table keys.
pub fn extract_function_symbols<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| extract_symbol(line.as_ref()).map(str::to_string))
        .collect()
}

/// Scan a trace file for raw function symbols
///
/// **Public** - used by the demangle command
///
/// # Errors
/// * `ParseError::ReadFailed` - the file cannot be opened or read
pub fn read_function_symbols(input_path: impl AsRef<Path>) -> Result<Vec<String>, ParseError> {
    let input_path = input_path.as_ref();

    debug!("Scanning trace: {}", input_path.display());

    let reader = BufReader::new(File::open(input_path)?);
    let (symbols, line_count) = scan_function_symbols(reader)?;

    debug!(
        "Found {} function symbols in {} lines",
        symbols.len(),
        line_count
    );

    Ok(symbols)
}

/// Scan a reader line by line, returning the symbols and the line count
///
/// Only extracted symbols are kept; lines are dropped as soon as they are
/// scanned.
pub fn scan_function_symbols<R: BufRead>(reader: R) -> Result<(Vec<String>, usize), ParseError> {
    let mut symbols = Vec::new();
    let mut line_count = 0;

    for line in reader.lines() {
        let line = line?;
        line_count += 1;

        if let Some(symbol) = extract_symbol(&line) {
            symbols.push(symbol.to_string());
        }
    }

    Ok((symbols, line_count))
}
