//! Declaration-level Go front end.
//!
//! enumarr only needs to see a Go file's package clause and its top-level
//! constant declarations, so this front end tokenizes full Go surface syntax
//! but parses only declaration structure. Bodies of functions and other
//! declaration kinds are skipped with balanced-delimiter consumption and
//! never descended into.

pub mod lexer;
pub mod parser;

pub use lexer::{tokenize, Token};
pub use parser::{parse_source, ConstSpec, Decl, SourceFile, SyntaxError, TypeAnnotation};

/// Convert a byte offset into a 1-indexed (line, column) pair.
///
/// Column counts characters, not bytes, so positions stay meaningful
/// for source containing multi-byte identifiers or comments.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let prefix = &source[..offset];
    let line = prefix.matches('\n').count() + 1;
    let column = prefix
        .rsplit('\n')
        .next()
        .map(|last| last.chars().count())
        .unwrap_or(0)
        + 1;
    (line, column)
}
