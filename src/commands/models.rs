use crate::demangle::TableStats;
use crate::output::RewriteStats;
use std::path::PathBuf;

/// Arguments for the demangle command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct DemangleArgs {
    /// Callgrind trace to read
    pub input: PathBuf,

    /// Destination for the demangled trace
    pub output: PathBuf,

    /// Optional JSON dump of the decoded symbol table
    pub symbols: Option<PathBuf>,

    /// Print a run summary to stdout
    pub print_summary: bool,
}

/// Result of a demangle run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub table: TableStats,
    pub rewrite: RewriteStats,
}
