use super::models::{DemangleArgs, RunSummary};

/// Print a text summary of a demangle run
pub fn print_summary(args: &DemangleArgs, summary: &RunSummary) {
    println!("\n{}", "=".repeat(60));
    println!("DEMANGLE SUMMARY");
    println!("{}", "=".repeat(60));
    println!("Input:            {}", args.input.display());
    println!("Output:           {}", args.output.display());
    println!("Lines:            {}", summary.rewrite.lines);
    println!("Function lines:   {}", summary.rewrite.function_lines);
    println!("Distinct symbols: {}", summary.table.distinct);
    println!("  Demangled:      {}", summary.table.decoded);
    println!("  Not Nim:        {}", summary.table.not_mangled);
    println!("  Unparseable:    {}", summary.table.undecodable);
    println!("Lines rewritten:  {}", summary.rewrite.changed_lines);
    println!("Substitutions:    {}", summary.rewrite.substitutions);
    println!("{}", "=".repeat(60));
}
