//! Rewrite pass over the original trace.
//!
//! Every function-context line has each known mangled symbol replaced by its
//! readable rendering. All other lines are written back unchanged, so the
//! output has exactly as many lines as the input.

use super::prepare_output_path;
use crate::demangle::SymbolTable;
use crate::parser::is_function_line;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Counters collected during the rewrite pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Lines read from the input
    pub lines: usize,

    /// Function-context lines among them
    pub function_lines: usize,

    /// Lines whose text changed
    pub changed_lines: usize,

    /// Individual symbol occurrences replaced
    pub substitutions: usize,
}

/// Line rewriter with precomputed replacements
///
/// **Public** - holds the table entries in substitution order
pub struct Rewriter<'a> {
    replacements: Vec<(&'a str, String)>,
}

impl<'a> Rewriter<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        let replacements = table
            .replacement_order()
            .into_iter()
            .map(|(raw, decoded)| (raw, decoded.render()))
            .collect();

        Self { replacements }
    }

    /// Rewrite one line, returning the new text and the number of
    /// occurrences replaced
    pub fn rewrite_line(&self, line: &str) -> (String, usize) {
        let mut line = line.trim().to_string();
        let mut substitutions = 0;

        if !is_function_line(&line) {
            return (line, substitutions);
        }

        for (raw, rendered) in &self.replacements {
            let count = line.matches(*raw).count();
            if count > 0 {
                line = line.replace(*raw, rendered);
                substitutions += count;
            }
        }

        (line, substitutions)
    }

    /// Stream every input line to the output
    ///
    /// Each line is written followed by a single `\n`.
    pub fn rewrite<R: BufRead, W: Write>(
        &self,
        input: R,
        mut output: W,
    ) -> Result<RewriteStats, OutputError> {
        let mut stats = RewriteStats::default();

        for line in input.lines() {
            let line = line?;
            stats.lines += 1;

            if is_function_line(line.trim()) {
                stats.function_lines += 1;
            }

            let (rewritten, substitutions) = self.rewrite_line(&line);
            if substitutions > 0 {
                stats.changed_lines += 1;
                stats.substitutions += substitutions;
            }

            writeln!(output, "{}", rewritten)?;
        }

        output.flush()?;
        Ok(stats)
    }
}

/// Rewrite a single line against a table
///
/// **Public** - convenience wrapper around [`Rewriter::rewrite_line`]
pub fn rewrite_line(line: &str, table: &SymbolTable) -> String {
    Rewriter::new(table).rewrite_line(line).0
}

/// Rewrite a whole stream against a table
pub fn rewrite<R: BufRead, W: Write>(
    input: R,
    output: W,
    table: &SymbolTable,
) -> Result<RewriteStats, OutputError> {
    Rewriter::new(table).rewrite(input, output)
}

/// Write the demangled trace to a file
///
/// **Public** - main entry point for pass 2
///
/// # Arguments
/// * `input_path` - Original callgrind trace
/// * `output_path` - Destination for the demangled trace
/// * `table` - Symbols collected in pass 1
///
/// # Errors
/// * `OutputError::InvalidPath` - Output path is empty or a directory
/// * `OutputError::WriteFailed` - I/O error while reading or writing
pub fn write_demangled_trace(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    table: &SymbolTable,
) -> Result<RewriteStats, OutputError> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    info!("Writing demangled trace to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let input = BufReader::new(File::open(input_path)?);
    let output = BufWriter::new(File::create(output_path)?);

    let stats = rewrite(input, output, table)?;

    debug!(
        "Rewrote {} of {} lines ({} substitutions)",
        stats.changed_lines, stats.lines, stats.substitutions
    );

    Ok(stats)
}
