//! Tokens and token kinds.

use crate::{text::Span, value::Value};

/// Every kind of token the lexer can produce. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    EndOfFile,
    Whitespace,
    Bad,

    Number,
    Identifier,

    Plus,
    Minus,
    Star,
    Slash,
    Bang,
    AmpersandAmpersand,
    PipePipe,
    Equals,
    EqualsEquals,
    BangEquals,
    OpenParen,
    CloseParen,

    TrueKeyword,
    FalseKeyword,
}

/// A lexical unit: kind, raw text, optional literal value, and location.
///
/// `value` is only populated for literal-bearing kinds: numbers carry their
/// parsed double, `true`/`false` carry the boolean. Identifiers carry no
/// parsed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub value: Option<Value>,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, value: Option<Value>, span: Span) -> Self {
        Self {
            kind,
            text,
            value,
            span,
        }
    }

    /// A synthesized token standing in for one the parser expected but did
    /// not find: empty text, no value, anchored at the current position.
    pub fn missing(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            text: "",
            value: None,
            span: Span::new(span.start, span.start, span.line, span.column),
        }
    }
}
