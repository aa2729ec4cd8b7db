//! Builder pattern API for running a generation end to end.
//!
//! Provides a fluent interface for configuring and running enum array
//! generation:
//!
//! ```rust,ignore
//! use enumarr_core::prelude::*;
//!
//! let report = EnumArr::new("Color")
//!     .files(["colors.go"])
//!     .export_var(true)
//!     .generate()?;
//!
//! println!("Wrote {}", report.output);
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::info;

use crate::error::{EnumarrError, EnumarrResult};
use crate::extract::{extract_file, FileConstants, ParsedEnum};
use crate::names::{derive_names, Target};
use crate::render::{render, write_generated, TemplateData};
use crate::report::GenerationReport;
use crate::scan::gather_go_files;

/// Default output file name for a target type: `<type>_array.go` with the
/// first letter lowercased, matching the original tool.
pub fn default_output_name(type_name: &str) -> String {
    let mut chars = type_name.chars();
    let stem: String = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("{stem}_array.go")
}

/// Builder for configuring one generation run.
///
/// # Example
///
/// ```rust,ignore
/// let report = EnumArr::new("Color")
///     .files(["colors.go", "extra.go"])
///     .generate()?;
/// ```
#[derive(Debug, Clone)]
pub struct EnumArr {
    /// Target type and export switches
    target: Target,

    /// Input files; empty means "all .go files in the scan directory"
    files: Vec<PathBuf>,

    /// Directory scanned when no files are given
    scan_dir: PathBuf,

    /// Output path; None derives it from the type name
    output: Option<PathBuf>,

    /// Dry-run mode (don't write the generated file)
    dry_run: bool,
}

impl EnumArr {
    /// Create a new generation builder for the given enum type.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            target: Target::new(type_name),
            files: Vec::new(),
            scan_dir: PathBuf::from("."),
            output: None,
            dry_run: false,
        }
    }

    /// Export the generated array variable.
    pub fn export_var(mut self, enabled: bool) -> Self {
        self.target.export_var = enabled;
        self
    }

    /// Emit the exported accessor function (on by default).
    pub fn export_func(mut self, enabled: bool) -> Self {
        self.target.export_func = enabled;
        self
    }

    /// Set the input files explicitly.
    pub fn files(mut self, files: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.files.extend(files.into_iter().map(Into::into));
        self
    }

    /// Directory to scan for `.go` files when no input files are given.
    pub fn scan_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scan_dir = dir.into();
        self
    }

    /// Override the output path.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Enable dry-run mode (resolve and report, write nothing).
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Run extraction, naming, and rendering; returns the run summary.
    ///
    /// Fail-fast: the first unreadable or unparsable input aborts the run.
    pub fn generate(&self) -> Result<GenerationReport> {
        if self.target.type_name.is_empty() {
            return Err(EnumarrError::invalid_argument("you should specify a type name").into());
        }

        // 1. Resolve inputs
        let files = if self.files.is_empty() {
            gather_go_files(&self.scan_dir).context("Failed to gather .go files")?
        } else {
            self.files.clone()
        };
        if files.is_empty() {
            return Err(EnumarrError::invalid_argument(format!(
                "no .go files to read in {}",
                self.scan_dir.display()
            ))
            .into());
        }

        // 2. Extract per file in parallel; collect preserves input order
        let per_file: Vec<FileConstants> = files
            .par_iter()
            .map(|path| extract_file(path, &self.target.type_name))
            .collect::<EnumarrResult<Vec<_>>>()?;

        // 3. Ordered fold into the accumulated result
        let mut parsed = ParsedEnum::default();
        for (path, file) in files.iter().zip(per_file) {
            parsed.merge(path, file)?;
        }

        // 4. Derive names and render
        let derived = derive_names(&self.target);
        let contents = render(&TemplateData::new(&parsed, &self.target, &derived));

        // 5. Write
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_output_name(&self.target.type_name)));
        if !self.dry_run {
            write_generated(&output, &contents)?;
        }

        info!(
            type_name = %self.target.type_name,
            package = %parsed.package,
            constants = parsed.names.len(),
            output = %output.display(),
            dry_run = self.dry_run,
            "array generated"
        );

        Ok(GenerationReport {
            package: parsed.package,
            type_name: self.target.type_name.clone(),
            names: parsed.names,
            var_name: derived.var_name,
            func_name: (!derived.func_name.is_empty()).then_some(derived.func_name),
            output: output.display().to_string(),
            dry_run: self.dry_run,
        })
    }
}
