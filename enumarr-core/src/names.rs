//! Identifier derivation for the generated declarations.
//!
//! Pure string rules, no I/O and no uniqueness checking against the target
//! package; a clash in the generated file is left for the Go compiler to
//! report.

/// Configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// The enum type whose constants are collected. Assumed non-empty and
    /// identifier-shaped; the invoking layer validates this.
    pub type_name: String,
    /// Export the generated array variable.
    pub export_var: bool,
    /// Emit an exported accessor function returning the array.
    pub export_func: bool,
}

impl Target {
    /// Target with the original tool's defaults: unexported variable,
    /// exported accessor.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            export_var: false,
            export_func: true,
        }
    }
}

/// Names of the generated declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    /// Array variable name. `<Type>Array` when exported, otherwise the
    /// unexported fallback `_<type>Array`.
    pub var_name: String,
    /// Accessor function name, `<Type>All`. Empty when not requested.
    pub func_name: String,
}

/// Derive the generated identifier names from the target descriptor.
pub fn derive_names(target: &Target) -> DerivedNames {
    let exported = capitalize_first(&target.type_name);

    let func_name = if target.export_func {
        format!("{exported}All")
    } else {
        String::new()
    };

    let var_name = if target.export_var {
        format!("{exported}Array")
    } else {
        format!("_{}Array", target.type_name)
    };

    DerivedNames {
        var_name,
        func_name,
    }
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
