//! enumarr CLI - generate a Go array of all constants of an enum-like type.
//!
//! Typical use, from a `go:generate` directive:
//!
//! ```text
//! //go:generate enumarr --type Color
//! ```
//!
//! With no file arguments, every `.go` file in the current directory is
//! scanned. The generated file declares the array variable and, unless
//! suppressed, an exported accessor function returning it.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use enumarr_core::{init_structured_logging, print_json, print_plain, EnumArr};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate a Go array of all constants of an enum-like type",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Name of the enum type to collect constants for
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    type_name: String,

    /// Export the generated array variable
    #[arg(long)]
    var: bool,

    /// Do not emit the exported accessor function
    #[arg(long)]
    no_func: bool,

    /// Name of the generated file [default: <type>_array.go]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Resolve and report without writing the generated file
    #[arg(long)]
    dry_run: bool,

    /// Output the generation report in JSON format
    #[arg(long)]
    json: bool,

    /// Go source files to scan [default: all .go files in the current directory]
    files: Vec<PathBuf>,
}

fn run(cli: Cli) -> Result<()> {
    let mut builder = EnumArr::new(&cli.type_name)
        .export_var(cli.var)
        .export_func(!cli.no_func)
        .files(cli.files)
        .dry_run(cli.dry_run);
    if let Some(output) = cli.output {
        builder = builder.output(output);
    }

    let report = builder.generate()?;

    if cli.json {
        print_json(&report);
    } else {
        print_plain(&report);
    }

    Ok(())
}

fn main() -> ExitCode {
    init_structured_logging();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("enumarr: error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
