//! Collected, never-thrown problem reports.
//!
//! Every recoverable problem in the pipeline becomes a [`Diagnostic`] in a
//! [`DiagnosticBag`], in detection order. Downstream stages keep running on
//! best-effort recovered nodes, so one submission surfaces every detectable
//! problem rather than just the first.

use bumpalo::Bump;

use crate::{
    syntax::token::{Token, TokenKind},
    text::Span,
    value::Type,
};

/// A reported problem with the span it refers to.
///
/// Messages are interned in the session arena so diagnostics stay `Copy` and
/// can be stored in arena-allocated global scopes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostic<'a> {
    pub message: &'a str,
    pub span: Span,
}

/// An append-only list of diagnostics, preserving detection order.
pub struct DiagnosticBag<'a> {
    arena: &'a Bump,
    diagnostics: Vec<Diagnostic<'a>>,
}

impl<'a> DiagnosticBag<'a> {
    pub fn new(arena: &'a Bump) -> Self {
        Self {
            arena,
            diagnostics: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic<'a>> {
        self.diagnostics.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic<'a>> {
        self.diagnostics
    }

    /// Move the collected diagnostics into the arena.
    pub fn into_slice(self) -> &'a [Diagnostic<'a>] {
        self.arena.alloc_slice_copy(&self.diagnostics)
    }

    fn report(&mut self, message: &str, span: Span) {
        self.diagnostics.push(Diagnostic {
            message: self.arena.alloc_str(message),
            span,
        });
    }

    pub fn report_invalid_character(&mut self, text: &str, span: Span) {
        self.report(&format!("invalid character '{text}' in input"), span);
    }

    pub fn report_invalid_number(&mut self, text: &str, span: Span) {
        self.report(&format!("'{text}' is not a valid number"), span);
    }

    pub fn report_unexpected_token(&mut self, found: &Token<'a>, expected: TokenKind) {
        self.report(
            &format!(
                "unexpected token <{:?}>, expected <{:?}>",
                found.kind, expected
            ),
            found.span,
        );
    }

    pub fn report_undefined_identifier(&mut self, identifier: &Token<'a>) {
        self.report(
            &format!("identifier '{}' is not defined", identifier.text),
            identifier.span,
        );
    }

    pub fn report_undefined_prefix_operator(&mut self, operator: &Token<'a>, operand: Type) {
        self.report(
            &format!(
                "prefix operator '{}' is not defined for type {operand}",
                operator.text
            ),
            operator.span,
        );
    }

    pub fn report_undefined_infix_operator(&mut self, operator: &Token<'a>, left: Type, right: Type) {
        self.report(
            &format!(
                "infix operator '{}' is not defined for types {left} and {right}",
                operator.text
            ),
            operator.span,
        );
    }

    pub fn report_cannot_convert_type(&mut self, identifier: &Token<'a>, from: Type, to: Type) {
        self.report(
            &format!(
                "cannot convert type {from} to {to} in assignment to '{}'",
                identifier.text
            ),
            identifier.span,
        );
    }
}
