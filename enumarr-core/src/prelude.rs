//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use enumarr_core::prelude::*;
//! ```

// Core types
pub use crate::error::{EnumarrError, EnumarrResult};
pub use crate::extract::{FileConstants, ParsedEnum};
pub use crate::names::{DerivedNames, Target};

// Builder API
pub use crate::generator::{default_output_name, EnumArr};

// Reporting
pub use crate::report::GenerationReport;

// File scanning
pub use crate::scan::gather_go_files;
