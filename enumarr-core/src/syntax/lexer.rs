//! Go tokenizer with automatic semicolon insertion.
//!
//! Built on `logos` for fast, table-driven scanning. Only the declaration
//! keywords get dedicated tokens; every other Go keyword lexes as an
//! identifier, which is exactly what the declaration-level parser wants.
//! Conveniently, the four keywords Go's semicolon insertion rule cares
//! about (`return`, `break`, `continue`, `fallthrough`) all lex as
//! identifiers here, so the identifier rule covers them too.

use logos::{Filter, Lexer, Logos};
use std::ops::Range;

/// Byte range of a token in the original source.
pub type Span = Range<usize>;

fn lex_ident(lex: &mut Lexer<Token>) -> String {
    lex.slice().to_owned()
}

/// Block comments are skipped unless they span a line break, in which case
/// they stand in for the line break for semicolon insertion (Go spec:
/// a general comment containing newlines acts like a newline).
fn lex_block_comment(lex: &mut Lexer<Token>) -> Filter<()> {
    if lex.slice().contains('\n') {
        Filter::Emit(())
    } else {
        Filter::Skip
    }
}

/// One Go token. Literal payloads are not kept; enumarr never evaluates
/// constant values, it only needs token kinds and identifier names.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    #[token("package")]
    Package,
    #[token("import")]
    Import,
    #[token("const")]
    Const,
    #[token("var")]
    Var,
    #[token("type")]
    Type,
    #[token("func")]
    Func,

    #[regex(r"[\p{L}_][\p{L}\p{N}_]*", lex_ident)]
    Ident(String),

    #[regex(r#""(\\.|[^"\\\n])*""#)]
    #[regex(r"`[^`]*`")]
    StringLit,

    #[regex(r"'(\\.|[^'\\\n])+'")]
    RuneLit,

    #[regex(r"0[xX][0-9a-fA-F_]+")]
    #[regex(r"0[bB][01_]+")]
    #[regex(r"0[oO][0-7_]+")]
    #[regex(r"[0-9][0-9_]*(\.[0-9_]*)?([eE][+-]?[0-9]+)?i?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?i?")]
    NumberLit,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("=")]
    Assign,
    #[token(".")]
    Dot,

    // Every remaining Go operator. The parser never inspects which one;
    // they only participate in balanced skipping of types and expressions.
    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token(">=")]
    #[token("&&")]
    #[token("||")]
    #[token("<<")]
    #[token(">>")]
    #[token("<-")]
    #[token("++")]
    #[token("--")]
    #[token(":=")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("<<=")]
    #[token(">>=")]
    #[token("&^")]
    #[token("&^=")]
    #[token("...")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("&")]
    #[token("|")]
    #[token("^")]
    #[token("<")]
    #[token(">")]
    #[token("!")]
    #[token(":")]
    #[token("~")]
    Operator,

    #[token("\n")]
    // Equivalent to `/\*([^*]|\*+[^*/])*\*+/`, rewritten because logos
    // 0.15 miscompiles that form and rejects valid block comments.
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/", lex_block_comment)]
    Newline,
}

impl Token {
    /// Whether Go inserts a semicolon when a line ends after this token.
    ///
    /// Not the full Go rule: `++` and `--` also trigger insertion, but the
    /// undifferentiated `Operator` token cannot tell. Those two only occur
    /// as statements inside function bodies, which the parser skips as
    /// balanced token runs where the missing semicolon is unobservable.
    fn triggers_semicolon(&self) -> bool {
        matches!(
            self,
            Token::Ident(_)
                | Token::StringLit
                | Token::RuneLit
                | Token::NumberLit
                | Token::RParen
                | Token::RBracket
                | Token::RBrace
        )
    }
}

/// A character the scanner could not form a token from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// Byte offset of the offending input.
    pub offset: usize,
}

/// Tokenize Go source, applying the automatic semicolon insertion rule.
///
/// `Newline` tokens never reach the caller: each one either becomes a
/// `Semicolon` (when the previous token can end a statement) or is dropped.
/// A trailing semicolon is synthesized at end of input so a final
/// declaration on an unterminated last line still parses.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, LexError> {
    let mut tokens: Vec<(Token, Span)> = Vec::new();
    let mut lex = Token::lexer(source);

    while let Some(result) = lex.next() {
        let token = result.map_err(|()| LexError {
            offset: lex.span().start,
        })?;

        if let Token::Newline = token {
            if tokens
                .last()
                .is_some_and(|(prev, _)| prev.triggers_semicolon())
            {
                tokens.push((Token::Semicolon, lex.span()));
            }
            continue;
        }

        tokens.push((token, lex.span()));
    }

    if tokens
        .last()
        .is_some_and(|(prev, _)| prev.triggers_semicolon())
    {
        tokens.push((Token::Semicolon, source.len()..source.len()));
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source)
            .expect("tokenize failed")
            .into_iter()
            .map(|(t, _)| t)
            .collect()
    }

    #[test]
    fn test_package_clause() {
        assert_eq!(
            kinds("package colors\n"),
            vec![
                Token::Package,
                Token::Ident("colors".to_string()),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_semicolon_inserted_after_ident() {
        let toks = kinds("a\nb\n");
        assert_eq!(
            toks,
            vec![
                Token::Ident("a".to_string()),
                Token::Semicolon,
                Token::Ident("b".to_string()),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_no_semicolon_after_operator() {
        // Line ends in `=`, so the statement continues on the next line.
        let toks = kinds("a =\n1\n");
        assert_eq!(
            toks,
            vec![
                Token::Ident("a".to_string()),
                Token::Assign,
                Token::NumberLit,
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_semicolon_after_closing_delimiters() {
        let toks = kinds("f()\n");
        assert_eq!(toks.len(), 4);
        assert_eq!(toks[3], Token::Semicolon);

        let toks = kinds("x[0]\n");
        assert_eq!(toks[4], Token::Semicolon);
    }

    #[test]
    fn test_line_comment_keeps_newline() {
        let toks = kinds("a // trailing comment\nb");
        assert_eq!(
            toks,
            vec![
                Token::Ident("a".to_string()),
                Token::Semicolon,
                Token::Ident("b".to_string()),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_block_comment_same_line_is_skipped() {
        let toks = kinds("a /* inline */ b\n");
        assert_eq!(
            toks,
            vec![
                Token::Ident("a".to_string()),
                Token::Ident("b".to_string()),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_block_comment_spanning_lines_acts_as_newline() {
        let toks = kinds("a /* spans\nlines */ b\n");
        assert_eq!(
            toks,
            vec![
                Token::Ident("a".to_string()),
                Token::Semicolon,
                Token::Ident("b".to_string()),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_keywords_vs_identifiers() {
        let toks = kinds("const constant\n");
        assert_eq!(
            toks,
            vec![
                Token::Const,
                Token::Ident("constant".to_string()),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_string_and_rune_literals() {
        let toks = kinds(r#"a = "it's \"quoted\"" + 'x' + '\n'"#);
        assert!(toks.contains(&Token::StringLit));
        assert!(toks.contains(&Token::RuneLit));
    }

    #[test]
    fn test_raw_string_spanning_lines_is_one_token() {
        let toks = kinds("a = `line one\nline two`\n");
        assert_eq!(
            toks,
            vec![
                Token::Ident("a".to_string()),
                Token::Assign,
                Token::StringLit,
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_number_forms() {
        for src in ["42", "0x2A", "0b1010", "0o52", "1_000", "3.14", "1e9", "2i"] {
            let toks = kinds(src);
            assert_eq!(toks[0], Token::NumberLit, "failed for {src}");
        }
    }

    #[test]
    fn test_unicode_identifier() {
        let toks = kinds("日本語 = 1\n");
        assert_eq!(toks[0], Token::Ident("日本語".to_string()));
    }

    #[test]
    fn test_blank_identifier() {
        let toks = kinds("_ = 1\n");
        assert_eq!(toks[0], Token::Ident("_".to_string()));
    }

    #[test]
    fn test_multi_char_operators_do_not_split_assign() {
        let toks = kinds("a := b == c\n");
        let assigns = toks.iter().filter(|t| **t == Token::Assign).count();
        assert_eq!(assigns, 0, ":= and == must not produce a bare =");
    }

    #[test]
    fn test_unrecognized_character_reports_offset() {
        let err = tokenize("package p\n@\n").unwrap_err();
        assert_eq!(err.offset, 10);
    }

    #[test]
    fn test_eof_semicolon_synthesized() {
        let toks = kinds("package p");
        assert_eq!(toks.last(), Some(&Token::Semicolon));
    }
}
