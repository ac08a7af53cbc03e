//! Demangle command implementation.
//!
//! The demangle command:
//! 1. Scans the trace for function symbols
//! 2. Classifies and decodes them into a symbol table
//! 3. Rewrites the trace with readable names
//! 4. Optionally dumps the symbol table as JSON

use super::models::{DemangleArgs, RunSummary};
use super::utils::print_summary;
use crate::demangle::SymbolTable;
use crate::output::{write_demangled_trace, write_symbol_table};
use crate::parser::read_function_symbols;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the demangle command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input trace cannot be read
/// * Output files cannot be written
///
/// # Example
/// ```ignore
/// let args = DemangleArgs {
///     input: PathBuf::from("callgrind.out.1234"),
///     output: PathBuf::from("callgrind.out.1234.demangled"),
///     ..Default::default()
/// };
///
/// validate_args(&args)?;
/// execute_demangle(args)?;
/// ```
pub fn execute_demangle(args: DemangleArgs) -> Result<RunSummary> {
    let start_time = Instant::now();

    info!("Demangling trace: {}", args.input.display());

    // Step 1: Scan function symbols
    info!("Step 1/3: Scanning function symbols...");
    let raw_symbols = read_function_symbols(&args.input)
        .with_context(|| format!("Failed to scan trace {}", args.input.display()))?;

    // Step 2: Build symbol table
    info!("Step 2/3: Decoding {} symbols...", raw_symbols.len());
    let (table, table_stats) = SymbolTable::build(&raw_symbols);

    debug!(
        "Symbol table: {} decoded, {} not mangled, {} unparseable",
        table_stats.decoded, table_stats.not_mangled, table_stats.undecodable
    );

    // Step 3: Rewrite trace
    info!("Step 3/3: Rewriting trace...");
    let rewrite_stats = write_demangled_trace(&args.input, &args.output, &table)
        .context("Failed to write demangled trace")?;

    info!("✓ Demangled trace written to: {}", args.output.display());

    if let Some(symbols_path) = &args.symbols {
        write_symbol_table(&table, symbols_path).context("Failed to write symbol table")?;
        info!("✓ Symbol table written to: {}", symbols_path.display());
    }

    let summary = RunSummary {
        table: table_stats,
        rewrite: rewrite_stats,
    };

    if args.print_summary {
        print_summary(&args, &summary);
    }

    let elapsed = start_time.elapsed();
    info!("Demangle completed in {:.2}s", elapsed.as_secs_f64());

    Ok(summary)
}

/// Validate demangle arguments
///
/// **Public** - called before execute_demangle so a missing input stops the
/// run before any output is created
pub fn validate_args(args: &DemangleArgs) -> Result<()> {
    if !args.input.exists() {
        println!("Can't open file: {}", args.input.display());
        anyhow::bail!("Can't open file: {}", args.input.display());
    }

    if !args.input.is_file() {
        anyhow::bail!("Input is not a file: {}", args.input.display());
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    // rewriting in place would truncate the input before it is read
    if is_same_file(&args.input, &args.output) {
        anyhow::bail!("Output must differ from input: {}", args.output.display());
    }

    if let Some(symbols) = &args.symbols {
        if is_same_file(symbols, &args.output) || is_same_file(symbols, &args.input) {
            anyhow::bail!("Symbol table path must differ from input and output");
        }
    }

    Ok(())
}

fn is_same_file(a: &std::path::Path, b: &std::path::Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
