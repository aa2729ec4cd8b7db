//! Run summaries - plaintext and JSON.

use serde::Serialize;

/// Summary of one generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// Package the constants (and the generated file) belong to.
    pub package: String,
    /// The target enum type.
    pub type_name: String,
    /// Collected constant names, in output order.
    pub names: Vec<String>,
    /// Name of the generated array variable.
    pub var_name: String,
    /// Name of the generated accessor, if one was emitted.
    pub func_name: Option<String>,
    /// Path the file was written to.
    pub output: String,
    /// Whether the run skipped writing (dry run).
    pub dry_run: bool,
}

/// Prints a report in plain text format.
pub fn print_plain(report: &GenerationReport) {
    print!("{}", plain_summary(report));
}

/// Builds the plain text summary. Dry runs announce what would be written
/// rather than claiming a file that does not exist.
fn plain_summary(report: &GenerationReport) -> String {
    use std::fmt::Write;

    let mut out = String::new();

    if report.names.is_empty() {
        let verb = if report.dry_run {
            "would write"
        } else {
            "wrote"
        };
        let _ = writeln!(
            out,
            "No constants of type {} found; {} empty array to {}.",
            report.type_name, verb, report.output
        );
        return out;
    }

    let verb = if report.dry_run {
        "Would generate"
    } else {
        "Generated"
    };
    let _ = writeln!(
        out,
        "{} {} with {} constants of type {}:",
        verb,
        report.output,
        report.names.len(),
        report.type_name
    );
    for name in &report.names {
        let _ = writeln!(out, "- {}", name);
    }

    out
}

/// Prints a report in JSON format.
///
/// Falls back to a plain line if serialization fails, which cannot happen
/// for this struct but is handled anyway.
pub fn print_json(report: &GenerationReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            print_plain(report);
        }
    }
}
