//! The hand-written scanner.

use bumpalo::Bump;

use super::{
    facts,
    token::{Token, TokenKind},
};
use crate::{diagnostics::DiagnosticBag, text::Span, value::Value};

/// Converts source text into a flat token stream.
///
/// Each call to [`Lexer::next_token`] returns exactly one token; the stream
/// ends in exactly one `EndOfFile` token. Malformed input never aborts the
/// scan: unrecognized characters become `Bad` tokens with a diagnostic, and
/// the cursor always advances so the scan terminates.
pub struct Lexer<'a> {
    source: &'a str,
    cursor: usize,
    line: usize,
    column: usize,
    diagnostics: DiagnosticBag<'a>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(arena: &'a Bump, source: &'a str) -> Self {
        Self {
            source,
            cursor: 0,
            line: 1,
            column: 1,
            diagnostics: DiagnosticBag::new(arena),
            finished: false,
        }
    }

    pub fn into_diagnostics(self) -> DiagnosticBag<'a> {
        self.diagnostics
    }

    fn current(&self) -> Option<char> {
        self.source[self.cursor..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.cursor += c.len_utf8();
            if c == '\n' || c == '\r' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Scan the next token. Restartable: at end of input this keeps
    /// returning `EndOfFile` tokens anchored at the final position.
    pub fn next_token(&mut self) -> Token<'a> {
        let start = self.cursor;
        let line = self.line;
        let column = self.column;

        // Classification order: end of input, digits, whitespace, words,
        // operator symbols, then anything else is a bad token.
        let kind = match self.current() {
            None => TokenKind::EndOfFile,
            Some(c) if c.is_ascii_digit() => {
                while matches!(self.current(), Some(c) if c.is_ascii_digit()) {
                    self.advance();
                }
                TokenKind::Number
            }
            Some(' ' | '\t' | '\r' | '\n') => {
                while matches!(self.current(), Some(' ' | '\t' | '\r' | '\n')) {
                    self.advance();
                }
                TokenKind::Whitespace
            }
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                while matches!(self.current(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
                    self.advance();
                }
                facts::keyword_or_identifier(&self.source[start..self.cursor])
            }
            Some(c) => self.symbol(c),
        };

        let text = &self.source[start..self.cursor];
        let span = Span::new(start, self.cursor, line, column);

        if kind == TokenKind::Bad {
            self.diagnostics.report_invalid_character(text, span);
        }

        let value = match kind {
            TokenKind::Number => match text.parse::<f64>() {
                Ok(number) => Some(Value::Number(number)),
                Err(_) => {
                    self.diagnostics.report_invalid_number(text, span);
                    None
                }
            },
            TokenKind::TrueKeyword => Some(Value::Bool(true)),
            TokenKind::FalseKeyword => Some(Value::Bool(false)),
            _ => None,
        };

        Token::new(kind, text, value, span)
    }

    /// Operator symbols. Two-character operators are greedily preferred over
    /// their one-character prefixes; a lone `&` or `|` is a bad token.
    fn symbol(&mut self, c: char) -> TokenKind {
        self.advance();
        match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '&' if self.current() == Some('&') => {
                self.advance();
                TokenKind::AmpersandAmpersand
            }
            '|' if self.current() == Some('|') => {
                self.advance();
                TokenKind::PipePipe
            }
            '=' => {
                if self.current() == Some('=') {
                    self.advance();
                    TokenKind::EqualsEquals
                } else {
                    TokenKind::Equals
                }
            }
            '!' => {
                if self.current() == Some('=') {
                    self.advance();
                    TokenKind::BangEquals
                } else {
                    TokenKind::Bang
                }
            }
            _ => TokenKind::Bad,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::EndOfFile {
            self.finished = true;
        }
        Some(token)
    }
}
