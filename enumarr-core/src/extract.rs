//! Constant extraction - the core of enumarr.
//!
//! Scans the top-level constant declaration groups of a parsed Go file and
//! collects, in declaration order, every identifier whose effective type is
//! the target enum type. The effective type is the explicit annotation when
//! present, or the type inherited from a preceding sibling spec in the same
//! group, following the `A Color = iota / B / C` enumerator idiom.
//!
//! Extraction is a fold: each file yields an immutable [`FileConstants`]
//! partial result, merged in input order into a [`ParsedEnum`].

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EnumarrError, EnumarrResult, IoResultExt};
use crate::syntax::{self, parse_source, ConstSpec, Decl, SyntaxError, TypeAnnotation};

/// Immutable result of extracting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConstants {
    /// Package name from the file's package clause.
    pub package: String,
    /// Matched constant names in declaration order. Duplicates are kept.
    pub names: Vec<String>,
}

/// Accumulated result across all input files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEnum {
    /// Package name shared by the input files. First non-empty wins;
    /// a later file declaring a different package is an error.
    pub package: String,
    /// Matched names in file order, then declaration order within a file.
    pub names: Vec<String>,
}

impl ParsedEnum {
    /// Fold one file's result into the accumulator.
    ///
    /// Appends names in order and applies the package policy: the first
    /// non-empty package name is kept, and any later file declaring a
    /// different package fails with [`EnumarrError::PackageMismatch`].
    pub fn merge(&mut self, path: &Path, file: FileConstants) -> EnumarrResult<()> {
        if self.package.is_empty() {
            self.package = file.package;
        } else if file.package != self.package {
            return Err(EnumarrError::PackageMismatch {
                path: path.to_path_buf(),
                expected: self.package.clone(),
                found: file.package,
            });
        }
        self.names.extend(file.names);
        Ok(())
    }
}

/// Extract the constants of `type_name` from Go source text.
///
/// Pure with respect to the filesystem; callers that want path context in
/// errors should go through [`extract_file`].
pub fn extract_from_source(
    source: &str,
    type_name: &str,
) -> Result<FileConstants, SyntaxError> {
    let file = parse_source(source)?;

    let mut names = Vec::new();
    for decl in &file.decls {
        match decl {
            Decl::ConstGroup(specs) => scan_group(specs, type_name, &mut names),
            Decl::Other => {}
        }
    }

    Ok(FileConstants {
        package: file.package,
        names,
    })
}

/// Read and extract one file, attaching path and location context to errors.
pub fn extract_file(path: &Path, type_name: &str) -> EnumarrResult<FileConstants> {
    let content = fs::read_to_string(path).with_path(path)?;

    let result = extract_from_source(&content, type_name).map_err(|e| {
        let (line, column) = syntax::line_col(&content, e.offset);
        EnumarrError::syntax_at(path, e.message, line, column)
    })?;

    debug!(
        path = %path.display(),
        package = %result.package,
        matched = result.names.len(),
        "extracted file"
    );

    Ok(result)
}

/// Scan one constant group with the type-inheritance state machine.
///
/// The single piece of state is the inherited type, `None` meaning "no
/// type in effect". Transition rules, applied per spec in order:
///
/// - an annotation that is not a bare identifier never matches and leaves
///   the state untouched;
/// - an untyped spec carrying its own values clears the state (its values
///   start a fresh, untyped run);
/// - an explicit bare-identifier annotation always replaces the state;
/// - after a match, a spec declaring more than one name clears the state
///   (`a, b T = x, y` does not propagate `T` to the next sibling).
fn scan_group(specs: &[ConstSpec], target: &str, out: &mut Vec<String>) {
    let mut inherited: Option<String> = None;

    for spec in specs {
        match &spec.annotation {
            TypeAnnotation::Other => continue,
            TypeAnnotation::None if spec.has_values => inherited = None,
            TypeAnnotation::None => {}
            TypeAnnotation::Named(name) => inherited = Some(name.clone()),
        }

        if inherited.as_deref() != Some(target) {
            continue;
        }

        out.extend(spec.names.iter().cloned());

        if spec.names.len() > 1 {
            inherited = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(source: &str, target: &str) -> Vec<String> {
        extract_from_source(source, target)
            .expect("extraction failed")
            .names
    }

    #[test]
    fn test_default_iota_enum() {
        let result = extract_from_source(
            "package defaultpkg\n\ntype DefaultEnum int\n\nconst (\n\tEnum1 DefaultEnum = iota\n\tEnum2\n\tEnum3\n)\n",
            "DefaultEnum",
        )
        .unwrap();

        assert_eq!(result.package, "defaultpkg");
        assert_eq!(result.names, vec!["Enum1", "Enum2", "Enum3"]);
    }

    #[test]
    fn test_string_enum_with_untyped_trap() {
        // The untyped valued spec in the middle must clear inheritance,
        // and the multi-name spec must contribute both names.
        let result = extract_from_source(
            "package stringpkg\ntype StringEnum string\n\nconst (\n\tEnum1        StringEnum = \"enum1\"\n\tNotEnum                 = \"it's a trap\"\n\tEnum2, Enum3 StringEnum = \"enum2\", \"enum3\"\n)\n",
            "StringEnum",
        )
        .unwrap();

        assert_eq!(result.package, "stringpkg");
        assert_eq!(result.names, vec!["Enum1", "Enum2", "Enum3"]);
    }

    #[test]
    fn test_inheritance_law() {
        // const ( A T = v1; B; C ) matches all three.
        let got = names("package p\nconst (\n\tA T = 1\n\tB\n\tC\n)\n", "T");
        assert_eq!(got, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_multi_name_reset_law() {
        // const ( A, B T = v1, v2; C ): C is NOT matched.
        let got = names("package p\nconst (\n\tA, B T = 1, 2\n\tC\n)\n", "T");
        assert_eq!(got, vec!["A", "B"]);
    }

    #[test]
    fn test_mixed_type_law() {
        // const ( A T = v1; X Other = v2; B ): B inherits Other, not T.
        let got = names(
            "package p\nconst (\n\tA T = 1\n\tX Other = 2\n\tB\n)\n",
            "T",
        );
        assert_eq!(got, vec!["A"]);
    }

    #[test]
    fn test_other_type_seeds_its_own_run() {
        let got = names(
            "package p\nconst (\n\tA T = 1\n\tX Other = 2\n\tB\n)\n",
            "Other",
        );
        assert_eq!(got, vec!["X", "B"]);
    }

    #[test]
    fn test_non_identifier_annotation_never_matches_or_inherits() {
        // The time.Duration spec neither matches nor disturbs the T run.
        let got = names(
            "package p\nconst (\n\tA T = 1\n\tD time.Duration = 2\n\tB\n)\n",
            "T",
        );
        assert_eq!(got, vec!["A", "B"]);
    }

    #[test]
    fn test_untyped_bare_spec_before_any_type() {
        // No type in effect yet, so nothing matches.
        let got = names("package p\nconst (\n\tA = 1\n\tB\n)\n", "T");
        assert!(got.is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let got = names(
            "package p\nconst (\n\tA T = 1\n)\n\nconst (\n\tA T = 1\n)\n",
            "T",
        );
        assert_eq!(got, vec!["A", "A"]);
    }

    #[test]
    fn test_blank_identifier_collected() {
        let got = names("package p\nconst (\n\tA T = iota\n\t_\n\tB\n)\n", "T");
        assert_eq!(got, vec!["A", "_", "B"]);
    }

    #[test]
    fn test_ungrouped_const_matches() {
        let got = names("package p\nconst Lone T = 1\n", "T");
        assert_eq!(got, vec!["Lone"]);
    }

    #[test]
    fn test_inheritance_does_not_cross_groups() {
        let got = names(
            "package p\nconst (\n\tA T = iota\n)\n\nconst (\n\tB\n)\n",
            "T",
        );
        assert_eq!(got, vec!["A"]);
    }

    #[test]
    fn test_non_const_declarations_ignored() {
        let got = names(
            "package p\n\ntype T int\n\nvar V T = 1\n\nfunc f() T {\n\tconst Inner T = 9\n\treturn Inner\n}\n",
            "T",
        );
        assert!(got.is_empty());
    }

    #[test]
    fn test_idempotent_on_same_source() {
        let src = "package p\nconst (\n\tA T = iota\n\tB\n)\n";
        assert_eq!(names(src, "T"), names(src, "T"));
    }

    #[test]
    fn test_package_captured_without_matches() {
        let result = extract_from_source("package empty\n", "T").unwrap();
        assert_eq!(result.package, "empty");
        assert!(result.names.is_empty());
    }

    // === Merge fold ===

    #[test]
    fn test_merge_appends_in_order() {
        let mut acc = ParsedEnum::default();
        acc.merge(
            Path::new("a.go"),
            FileConstants {
                package: "p".into(),
                names: vec!["A".into(), "B".into()],
            },
        )
        .unwrap();
        acc.merge(
            Path::new("b.go"),
            FileConstants {
                package: "p".into(),
                names: vec!["C".into()],
            },
        )
        .unwrap();

        assert_eq!(acc.package, "p");
        assert_eq!(acc.names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_merge_package_mismatch() {
        let mut acc = ParsedEnum::default();
        acc.merge(
            Path::new("a.go"),
            FileConstants {
                package: "colors".into(),
                names: vec![],
            },
        )
        .unwrap();

        let err = acc
            .merge(
                Path::new("b.go"),
                FileConstants {
                    package: "shapes".into(),
                    names: vec![],
                },
            )
            .unwrap_err();

        assert!(matches!(err, EnumarrError::PackageMismatch { .. }));
    }

    #[test]
    fn test_extract_file_missing() {
        let err = extract_file(Path::new("/nonexistent/enum.go"), "T").unwrap_err();
        assert!(matches!(err, EnumarrError::Io { .. }));
    }

    #[test]
    fn test_syntax_error_carries_location() {
        let dir = std::env::temp_dir().join("enumarr_extract_syntax_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.go");
        std::fs::write(&path, "package p\n42\n").unwrap();

        let err = extract_file(&path, "T").unwrap_err();
        match err {
            EnumarrError::Syntax { line, column, .. } => {
                assert_eq!(line, Some(2));
                assert_eq!(column, Some(1));
            }
            other => panic!("expected Syntax error, got {other:?}"),
        }

        std::fs::remove_dir_all(&dir).ok();
    }
}
