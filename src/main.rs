//! nim-callgrind CLI
//!
//! Demangles Nim symbols in a callgrind trace and writes the result to a
//! new file.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use nim_callgrind::commands::{execute_demangle, validate_args, DemangleArgs};

/// Process a callgrind file and demangle Nim symbols
#[derive(Parser, Debug)]
#[command(name = "nim-callgrind")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Callgrind input file
    input_file: PathBuf,

    /// Demangled output file
    output_file: PathBuf,

    /// Also write the decoded symbol table as JSON
    #[arg(long)]
    symbols: Option<PathBuf>,

    /// Print text summary to stdout
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = DemangleArgs {
        input: cli.input_file,
        output: cli.output_file,
        symbols: cli.symbols,
        print_summary: cli.summary,
    };

    // Validate args first
    validate_args(&args)?;

    execute_demangle(args)?;

    Ok(())
}
