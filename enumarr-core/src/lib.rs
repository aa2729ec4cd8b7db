//! enumarr-core: enum constant array generation library for Go source.
//!
//! This library provides the components behind the `enumarr` code
//! generator: given an enum-like Go type `T` (a named type with a set of
//! package-level constants), it collects every constant identifier of
//! effective type `T` in declaration order and renders a Go file declaring
//! an array of them, optionally with an exported accessor.
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use enumarr_core::prelude::*;
//!
//! let report = EnumArr::new("Color")
//!     .files(["colors.go"])
//!     .generate()?;
//!
//! for name in &report.names {
//!     println!("constant: {}", name);
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`syntax`]: Declaration-level Go tokenizer and parser
//! - [`extract`]: Constant extraction with type inheritance across specs
//! - [`names`]: Derivation of the generated variable/function names
//! - [`render`]: Rendering and writing of the generated Go file
//! - [`scan`]: Default `.go` input discovery
//! - [`generator`]: Fluent builder API tying a run together
//! - [`report`]: Plain and JSON run summaries
//! - [`error`]: Typed error handling
//! - [`logging`]: Structured logging setup

pub mod error;
pub mod extract;
pub mod generator;
pub mod logging;
pub mod names;
pub mod prelude;
pub mod render;
pub mod report;
pub mod scan;
pub mod syntax;

// Error types
pub use error::{EnumarrError, EnumarrResult, IoResultExt};

// Builder API
pub use generator::{default_output_name, EnumArr};

// Extraction
pub use extract::{extract_file, extract_from_source, FileConstants, ParsedEnum};

// Naming
pub use names::{derive_names, DerivedNames, Target};

// Rendering
pub use render::{render, write_generated, TemplateData};

// Reporting
pub use report::{print_json, print_plain, GenerationReport};

// File scanning
pub use scan::gather_go_files;

// Logging
pub use logging::init_structured_logging;

// Syntax tree types
pub use syntax::{parse_source, ConstSpec, Decl, SourceFile, TypeAnnotation};
