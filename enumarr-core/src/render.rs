//! Rendering of the generated Go file.
//!
//! Builds the output with pre-allocated string buffers and the
//! `std::fmt::Write` trait. The layout follows Go's generated-code
//! conventions: a `DO NOT EDIT` header, the package clause, the array
//! variable, and optionally the accessor function.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::error::{EnumarrResult, IoResultExt};
use crate::extract::ParsedEnum;
use crate::names::{DerivedNames, Target};

/// Everything the template needs, fully populated by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateData<'a> {
    /// Package clause of the generated file.
    pub package: &'a str,
    /// The enum type name, used as the array element type.
    pub type_name: &'a str,
    /// Constant identifiers, in extraction order.
    pub names: &'a [String],
    /// Name of the generated array variable.
    pub var_name: &'a str,
    /// Name of the accessor function; empty suppresses the function.
    pub func_name: &'a str,
}

impl<'a> TemplateData<'a> {
    /// Assemble template data from the accumulated parse result and the
    /// derived names.
    pub fn new(parsed: &'a ParsedEnum, target: &'a Target, derived: &'a DerivedNames) -> Self {
        Self {
            package: &parsed.package,
            type_name: &target.type_name,
            names: &parsed.names,
            var_name: &derived.var_name,
            func_name: &derived.func_name,
        }
    }
}

/// Render the generated Go source text.
pub fn render(data: &TemplateData) -> String {
    // ~32 bytes per constant line plus a fixed header/footer.
    let mut out = String::with_capacity(data.names.len() * 32 + 256);

    // Infallible for String, but keep the Write-trait plumbing honest.
    if write_content(&mut out, data).is_err() {
        return String::new();
    }

    out
}

fn write_content(out: &mut impl Write, data: &TemplateData) -> std::fmt::Result {
    writeln!(
        out,
        "// Code generated by \"enumarr --type {}\"; DO NOT EDIT.",
        data.type_name
    )?;
    writeln!(out)?;
    writeln!(out, "package {}", data.package)?;
    writeln!(out)?;

    writeln!(out, "var {} = []{}{{", data.var_name, data.type_name)?;
    for name in data.names {
        writeln!(out, "\t{name},")?;
    }
    writeln!(out, "}}")?;

    if !data.func_name.is_empty() {
        writeln!(out)?;
        writeln!(out, "func {}() []{} {{", data.func_name, data.type_name)?;
        writeln!(out, "\treturn {}", data.var_name)?;
        writeln!(out, "}}")?;
    }

    Ok(())
}

/// Write the rendered text to the output path.
pub fn write_generated(path: &Path, contents: &str) -> EnumarrResult<()> {
    fs::write(path, contents).with_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (ParsedEnum, Target, DerivedNames) {
        let parsed = ParsedEnum {
            package: "colors".to_string(),
            names: vec!["Red".to_string(), "Green".to_string(), "Blue".to_string()],
        };
        let target = Target::new("Color");
        let derived = crate::names::derive_names(&target);
        (parsed, target, derived)
    }

    #[test]
    fn test_render_with_accessor() {
        let (parsed, target, derived) = sample();
        let out = render(&TemplateData::new(&parsed, &target, &derived));

        assert_eq!(
            out,
            "// Code generated by \"enumarr --type Color\"; DO NOT EDIT.\n\
             \n\
             package colors\n\
             \n\
             var _ColorArray = []Color{\n\
             \tRed,\n\
             \tGreen,\n\
             \tBlue,\n\
             }\n\
             \n\
             func ColorAll() []Color {\n\
             \treturn _ColorArray\n\
             }\n"
        );
    }

    #[test]
    fn test_render_without_accessor() {
        let (parsed, mut target, _) = sample();
        target.export_func = false;
        target.export_var = true;
        let derived = crate::names::derive_names(&target);
        let out = render(&TemplateData::new(&parsed, &target, &derived));

        assert!(out.contains("var ColorArray = []Color{"));
        assert!(!out.contains("func "));
    }

    #[test]
    fn test_render_empty_names() {
        let parsed = ParsedEnum {
            package: "p".to_string(),
            names: vec![],
        };
        let target = Target::new("T");
        let derived = crate::names::derive_names(&target);
        let out = render(&TemplateData::new(&parsed, &target, &derived));

        assert!(out.contains("var _TArray = []T{\n}\n"));
    }

    #[test]
    fn test_write_generated_roundtrip() {
        let dir = std::env::temp_dir().join("enumarr_render_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("color_array.go");

        write_generated(&path, "package colors\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "package colors\n");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_generated_bad_path() {
        let err = write_generated(Path::new("/nonexistent/dir/out.go"), "x").unwrap_err();
        assert!(matches!(err, crate::error::EnumarrError::Io { .. }));
    }
}
