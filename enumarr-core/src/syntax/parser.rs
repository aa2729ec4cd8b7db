//! Declaration-level parser for Go source.
//!
//! Produces the package name and a closed set of top-level declaration
//! shapes: constant groups, fully structured, and everything else as an
//! opaque `Other`. Expressions and type expressions are consumed with
//! balanced-delimiter skipping; only a type annotation that is a single
//! bare identifier is recorded by name, since that is the only shape that
//! can match or seed inheritance of the target enum type.

use crate::syntax::lexer::{tokenize, Span, Token};

/// A parsed Go file, reduced to what extraction needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Identifier from the package clause.
    pub package: String,
    /// Top-level declarations in source order.
    pub decls: Vec<Decl>,
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    /// A `const` declaration; a single ungrouped spec parses as a group of one.
    ConstGroup(Vec<ConstSpec>),
    /// Any other declaration kind (import, var, type, func). Never scanned.
    Other,
}

/// One spec within a constant declaration group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstSpec {
    /// Declared names, left to right. Never empty.
    pub names: Vec<String>,
    /// The explicit type annotation, if any.
    pub annotation: TypeAnnotation,
    /// Whether the spec carries `= <expressions>`.
    pub has_values: bool,
}

/// Shape of a spec's type annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeAnnotation {
    /// No annotation; the spec may inherit a type from a preceding sibling.
    None,
    /// A single bare identifier, e.g. `Color`.
    Named(String),
    /// Anything else: qualified (`pkg.T`), composite (`[]T`, `map[K]V`,
    /// `*T`, `struct{...}`, `func(...)`). Never matches, never inherits.
    Other,
}

/// A syntax error with the byte offset it was detected at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub offset: usize,
}

impl SyntaxError {
    fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }
}

/// Parse Go source text into a [`SourceFile`].
///
/// Fails on input the tokenizer rejects, on a missing package clause, on
/// unbalanced delimiters, and on malformed constant specs. Declaration
/// kinds other than `const` are validated only for balance.
pub fn parse_source(source: &str) -> Result<SourceFile, SyntaxError> {
    let tokens = tokenize(source)
        .map_err(|e| SyntaxError::new("unrecognized character", e.offset))?;
    Parser {
        tokens,
        pos: 0,
        end: source.len(),
    }
    .parse()
}

struct Parser {
    tokens: Vec<(Token, Span)>,
    pos: usize,
    /// Byte length of the source, used as the offset of end-of-input errors.
    end: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn peek_at(&self, ahead: usize) -> Option<&Token> {
        self.tokens.get(self.pos + ahead).map(|(t, _)| t)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map(|(_, span)| span.start)
            .unwrap_or(self.end)
    }

    fn error(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(message, self.offset())
    }

    fn expect_ident(&mut self, context: &str) -> Result<String, SyntaxError> {
        match self.peek() {
            Some(Token::Ident(name)) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.error(format!("expected identifier {context}"))),
        }
    }

    fn skip_semicolons(&mut self) {
        while let Some(Token::Semicolon) = self.peek() {
            self.advance();
        }
    }

    fn parse(mut self) -> Result<SourceFile, SyntaxError> {
        self.skip_semicolons();

        match self.peek() {
            Some(Token::Package) => self.advance(),
            _ => return Err(self.error("expected package clause")),
        }
        let package = self.expect_ident("after package keyword")?;
        match self.peek() {
            Some(Token::Semicolon) => self.advance(),
            None => {}
            _ => return Err(self.error("expected newline after package clause")),
        }

        let mut decls = Vec::new();
        loop {
            self.skip_semicolons();
            match self.peek() {
                None => break,
                Some(Token::Const) => {
                    self.advance();
                    decls.push(self.parse_const_decl()?);
                }
                Some(Token::Import | Token::Var | Token::Type | Token::Func) => {
                    self.advance();
                    self.skip_decl()?;
                    decls.push(Decl::Other);
                }
                Some(_) => return Err(self.error("expected declaration")),
            }
        }

        Ok(SourceFile { package, decls })
    }

    /// Consume the remainder of a non-const declaration: everything up to
    /// the first semicolon at delimiter depth zero. Bodies and grouped
    /// forms pass through as balanced token runs.
    fn skip_decl(&mut self) -> Result<(), SyntaxError> {
        let mut depth: usize = 0;
        loop {
            match self.peek() {
                None => {
                    if depth == 0 {
                        return Ok(());
                    }
                    return Err(self.error("unexpected end of file in declaration"));
                }
                Some(Token::LParen | Token::LBrace | Token::LBracket) => {
                    depth += 1;
                    self.advance();
                }
                Some(Token::RParen | Token::RBrace | Token::RBracket) => {
                    if depth == 0 {
                        return Err(self.error("unbalanced closing delimiter"));
                    }
                    depth -= 1;
                    self.advance();
                }
                Some(Token::Semicolon) if depth == 0 => {
                    self.advance();
                    return Ok(());
                }
                Some(_) => self.advance(),
            }
        }
    }

    /// Parse `const ( ... )` or a single ungrouped `const` spec.
    /// The `const` keyword has already been consumed.
    fn parse_const_decl(&mut self) -> Result<Decl, SyntaxError> {
        if let Some(Token::LParen) = self.peek() {
            self.advance();
            let mut specs = Vec::new();
            loop {
                self.skip_semicolons();
                match self.peek() {
                    Some(Token::RParen) => {
                        self.advance();
                        break;
                    }
                    Some(Token::Ident(_)) => specs.push(self.parse_spec(true)?),
                    Some(_) => return Err(self.error("expected constant spec")),
                    None => return Err(self.error("unexpected end of file in const block")),
                }
            }
            if let Some(Token::Semicolon) = self.peek() {
                self.advance();
            }
            Ok(Decl::ConstGroup(specs))
        } else {
            let spec = self.parse_spec(false)?;
            Ok(Decl::ConstGroup(vec![spec]))
        }
    }

    /// Parse one spec: `IdentifierList [ [ Type ] "=" ExpressionList ]`.
    ///
    /// The trailing semicolon is consumed; a closing `)` is left for the
    /// group loop.
    fn parse_spec(&mut self, in_group: bool) -> Result<ConstSpec, SyntaxError> {
        let mut names = vec![self.expect_ident("in constant spec")?];
        while let Some(Token::Comma) = self.peek() {
            self.advance();
            names.push(self.expect_ident("after comma in constant spec")?);
        }

        let mut annotation = TypeAnnotation::None;
        if !self.at_spec_end(in_group) && !matches!(self.peek(), Some(Token::Assign)) {
            annotation = self.parse_type_annotation(in_group)?;
        }

        let mut has_values = false;
        if let Some(Token::Assign) = self.peek() {
            self.advance();
            if self.at_spec_end(in_group) {
                return Err(self.error("expected expression after '='"));
            }
            has_values = true;
            self.consume_balanced(in_group, "constant expression")?;
        }

        match self.peek() {
            Some(Token::Semicolon) => self.advance(),
            Some(Token::RParen) if in_group => {}
            None => {}
            _ => return Err(self.error("expected end of constant spec")),
        }

        Ok(ConstSpec {
            names,
            annotation,
            has_values,
        })
    }

    /// Whether the current token terminates the spec (before any `=`).
    fn at_spec_end(&self, in_group: bool) -> bool {
        match self.peek() {
            None => true,
            Some(Token::Semicolon) => true,
            Some(Token::RParen) => in_group,
            _ => false,
        }
    }

    /// Parse a type annotation, classifying it as a bare identifier or
    /// anything else. Composite type expressions are consumed balanced.
    fn parse_type_annotation(&mut self, in_group: bool) -> Result<TypeAnnotation, SyntaxError> {
        if let Some(Token::Ident(name)) = self.peek() {
            let followed_by_end = match self.peek_at(1) {
                None => true,
                Some(Token::Assign | Token::Semicolon) => true,
                Some(Token::RParen) => in_group,
                _ => false,
            };
            if followed_by_end {
                let name = name.clone();
                self.advance();
                return Ok(TypeAnnotation::Named(name));
            }
        }

        self.consume_balanced(in_group, "type expression")?;
        Ok(TypeAnnotation::Other)
    }

    /// Consume tokens until `=`, `;`, or (inside a group) `)` at depth
    /// zero, keeping parentheses, braces, and brackets balanced. The
    /// stopping token is not consumed.
    fn consume_balanced(&mut self, in_group: bool, context: &str) -> Result<(), SyntaxError> {
        let mut depth: usize = 0;
        loop {
            match self.peek() {
                None => {
                    if depth == 0 {
                        return Ok(());
                    }
                    return Err(self.error(format!("unexpected end of file in {context}")));
                }
                Some(Token::Assign | Token::Semicolon) if depth == 0 => return Ok(()),
                Some(Token::RParen) if depth == 0 => {
                    if in_group {
                        return Ok(());
                    }
                    return Err(self.error("unbalanced closing delimiter"));
                }
                Some(Token::LParen | Token::LBrace | Token::LBracket) => {
                    depth += 1;
                    self.advance();
                }
                Some(Token::RParen | Token::RBrace | Token::RBracket) => {
                    if depth == 0 {
                        return Err(self.error("unbalanced closing delimiter"));
                    }
                    depth -= 1;
                    self.advance();
                }
                Some(_) => self.advance(),
            }
        }
    }
}
