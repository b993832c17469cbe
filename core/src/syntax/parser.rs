//! Precedence-climbing parser.
//!
//! The parser never fails: wherever a required token is missing it
//! synthesizes one (correct kind, empty text, current position), reports a
//! single "unexpected token" diagnostic, and keeps going. Every input,
//! including the empty string, produces a tree.

use bumpalo::Bump;
use tracing::trace;

use super::{
    facts,
    lexer::Lexer,
    token::{Token, TokenKind},
    tree::{ExprSyntax, SourceFile, SyntaxTree},
};
use crate::diagnostics::DiagnosticBag;

/// Parse one submission. Diagnostics come back in detection order, lexical
/// ones first.
pub fn parse<'a>(arena: &'a Bump, source: &'a str) -> SyntaxTree<'a> {
    let mut lexer = Lexer::new(arena, source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        match token.kind {
            TokenKind::Whitespace | TokenKind::Bad => continue,
            TokenKind::EndOfFile => {
                tokens.push(token);
                break;
            }
            _ => tokens.push(token),
        }
    }

    let mut parser = Parser {
        arena,
        tokens,
        cursor: 0,
        diagnostics: lexer.into_diagnostics(),
    };
    let root = parser.source_file();

    let diagnostics = parser.diagnostics.into_vec();
    trace!(diagnostics = diagnostics.len(), "parsed submission");

    SyntaxTree {
        source,
        root,
        diagnostics,
    }
}

struct Parser<'a> {
    arena: &'a Bump,
    tokens: Vec<Token<'a>>,
    cursor: usize,
    diagnostics: DiagnosticBag<'a>,
}

impl<'a> Parser<'a> {
    fn alloc(&self, node: ExprSyntax<'a>) -> &'a ExprSyntax<'a> {
        self.arena.alloc(node)
    }

    fn peek(&self, offset: usize) -> Token<'a> {
        // The token list always ends in EndOfFile, so clamp to it.
        let index = (self.cursor + offset).min(self.tokens.len() - 1);
        self.tokens[index]
    }

    fn current(&self) -> Token<'a> {
        self.peek(0)
    }

    /// Consume the current token if it has the expected kind; otherwise
    /// report one diagnostic and synthesize the expected token in place.
    fn consume(&mut self, kind: TokenKind) -> Token<'a> {
        let current = self.current();
        if current.kind == kind {
            self.cursor += 1;
            return current;
        }

        self.diagnostics.report_unexpected_token(&current, kind);
        Token::missing(kind, current.span)
    }

    fn source_file(&mut self) -> SourceFile<'a> {
        let body = self.expression();
        let eof = self.consume(TokenKind::EndOfFile);
        SourceFile { body, eof }
    }

    fn expression(&mut self) -> &'a ExprSyntax<'a> {
        self.assignment()
    }

    /// Assignment is right-associative and only recognized from a two-token
    /// lookahead (identifier followed by `=`); anything else falls through
    /// to operator precedence parsing.
    fn assignment(&mut self) -> &'a ExprSyntax<'a> {
        if self.peek(0).kind == TokenKind::Identifier && self.peek(1).kind == TokenKind::Equals {
            let identifier = self.consume(TokenKind::Identifier);
            let equals = self.consume(TokenKind::Equals);
            let value = self.assignment();
            return self.alloc(ExprSyntax::Assignment {
                identifier,
                equals,
                value,
            });
        }

        self.precedence_expression(0)
    }

    /// Unified prefix/infix precedence climbing.
    ///
    /// A prefix operator is taken when its precedence is nonzero and at
    /// least the enclosing minimum; the infix loop continues while the
    /// current operator binds strictly tighter than the enclosing minimum,
    /// which yields left associativity for equal-precedence chains.
    fn precedence_expression(&mut self, min_precedence: u8) -> &'a ExprSyntax<'a> {
        let prefix_precedence = facts::prefix_precedence(self.current().kind);
        let mut left = if prefix_precedence != 0 && prefix_precedence >= min_precedence {
            let operator = self.consume(self.current().kind);
            let operand = self.precedence_expression(prefix_precedence);
            self.alloc(ExprSyntax::Prefix { operator, operand })
        } else {
            self.primary()
        };

        loop {
            let precedence = facts::infix_precedence(self.current().kind);
            if precedence == 0 || precedence <= min_precedence {
                break;
            }

            let operator = self.consume(self.current().kind);
            let right = self.precedence_expression(precedence);
            left = self.alloc(ExprSyntax::Infix {
                left,
                operator,
                right,
            });
        }

        left
    }

    fn primary(&mut self) -> &'a ExprSyntax<'a> {
        match self.current().kind {
            TokenKind::TrueKeyword | TokenKind::FalseKeyword => {
                let keyword = self.consume(self.current().kind);
                self.alloc(ExprSyntax::BoolLiteral { keyword })
            }
            TokenKind::Identifier => {
                let identifier = self.consume(TokenKind::Identifier);
                self.alloc(ExprSyntax::Name { identifier })
            }
            TokenKind::OpenParen => {
                let open = self.consume(TokenKind::OpenParen);
                let expr = self.expression();
                let close = self.consume(TokenKind::CloseParen);
                self.alloc(ExprSyntax::Parenthesized { open, expr, close })
            }
            // Anything else must be a number; on mismatch this synthesizes a
            // placeholder literal, which also covers empty input.
            _ => {
                let literal = self.consume(TokenKind::Number);
                self.alloc(ExprSyntax::NumberLiteral { literal })
            }
        }
    }
}
