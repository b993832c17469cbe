//! The syntax tree.
//!
//! One variant per grammar production, allocated in the session arena and
//! linked by reference, so nodes are `Copy` handles the way the rest of the
//! pipeline likes them. Nodes keep the tokens they were built from for span
//! and text reporting.

use core::fmt;

use super::token::Token;
use crate::{diagnostics::Diagnostic, text::Span};

/// An expression node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExprSyntax<'a> {
    Assignment {
        identifier: Token<'a>,
        equals: Token<'a>,
        value: &'a ExprSyntax<'a>,
    },
    Infix {
        left: &'a ExprSyntax<'a>,
        operator: Token<'a>,
        right: &'a ExprSyntax<'a>,
    },
    Prefix {
        operator: Token<'a>,
        operand: &'a ExprSyntax<'a>,
    },
    Parenthesized {
        open: Token<'a>,
        expr: &'a ExprSyntax<'a>,
        close: Token<'a>,
    },
    Name {
        identifier: Token<'a>,
    },
    NumberLiteral {
        literal: Token<'a>,
    },
    BoolLiteral {
        keyword: Token<'a>,
    },
}

impl<'a> ExprSyntax<'a> {
    /// The full source range of this node, anchored at its leftmost token.
    pub fn span(&self) -> Span {
        match self {
            ExprSyntax::Assignment {
                identifier, value, ..
            } => Span::combine(identifier.span, value.span()),
            ExprSyntax::Infix { left, right, .. } => Span::combine(left.span(), right.span()),
            ExprSyntax::Prefix { operator, operand } => {
                Span::combine(operator.span, operand.span())
            }
            ExprSyntax::Parenthesized { open, close, .. } => Span::combine(open.span, close.span),
            ExprSyntax::Name { identifier } => identifier.span,
            ExprSyntax::NumberLiteral { literal } => literal.span,
            ExprSyntax::BoolLiteral { keyword } => keyword.span,
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            ExprSyntax::Assignment { .. } => "AssignmentExpression",
            ExprSyntax::Infix { .. } => "InfixExpression",
            ExprSyntax::Prefix { .. } => "PrefixExpression",
            ExprSyntax::Parenthesized { .. } => "ParenthesizedExpression",
            ExprSyntax::Name { .. } => "IdentifierExpression",
            ExprSyntax::NumberLiteral { .. } => "NumericLiteral",
            ExprSyntax::BoolLiteral { .. } => "BooleanLiteral",
        }
    }

    /// Ordered children, for tree printing and traversal.
    fn children(&self) -> Vec<Child<'a>> {
        match *self {
            ExprSyntax::Assignment {
                identifier,
                equals,
                value,
            } => vec![
                Child::Token(identifier),
                Child::Token(equals),
                Child::Node(value),
            ],
            ExprSyntax::Infix {
                left,
                operator,
                right,
            } => vec![Child::Node(left), Child::Token(operator), Child::Node(right)],
            ExprSyntax::Prefix { operator, operand } => {
                vec![Child::Token(operator), Child::Node(operand)]
            }
            ExprSyntax::Parenthesized { open, expr, close } => {
                vec![Child::Token(open), Child::Node(expr), Child::Token(close)]
            }
            ExprSyntax::Name { identifier } => vec![Child::Token(identifier)],
            ExprSyntax::NumberLiteral { literal } => vec![Child::Token(literal)],
            ExprSyntax::BoolLiteral { keyword } => vec![Child::Token(keyword)],
        }
    }
}

enum Child<'a> {
    Node(&'a ExprSyntax<'a>),
    Token(Token<'a>),
}

/// The root of one submission's syntax tree: the body expression plus the
/// end-of-file token that terminated it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceFile<'a> {
    pub body: &'a ExprSyntax<'a>,
    pub eof: Token<'a>,
}

impl<'a> SourceFile<'a> {
    /// Write the tree in the REPL's dump format.
    pub fn write_tree(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "└───SourceFile")?;
        write_child(out, &Child::Node(self.body), "    ", false)?;
        write_child(out, &Child::Token(self.eof), "    ", true)
    }

    /// The tree dump as a string, mostly for tests and the CLI.
    pub fn tree_string(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out).expect("writing to a String cannot fail");
        out
    }
}

fn write_child(out: &mut dyn fmt::Write, child: &Child<'_>, indent: &str, is_last: bool) -> fmt::Result {
    let marker = if is_last { "└───" } else { "├───" };
    match child {
        Child::Token(token) => {
            write!(out, "{indent}{marker}{:?}", token.kind)?;
            if let Some(value) = token.value {
                write!(out, " {value}")?;
            }
            writeln!(out)
        }
        Child::Node(node) => {
            writeln!(out, "{indent}{marker}{}", node.kind_name())?;
            let deeper = format!("{indent}{}", if is_last { "    " } else { "│   " });
            let children = node.children();
            let last = children.len().saturating_sub(1);
            for (i, child) in children.iter().enumerate() {
                write_child(out, child, &deeper, i == last)?;
            }
            Ok(())
        }
    }
}

/// One submission's parse result: the root, its source, and the lexical and
/// syntactic diagnostics in detection order.
#[derive(Debug)]
pub struct SyntaxTree<'a> {
    pub source: &'a str,
    pub root: SourceFile<'a>,
    pub diagnostics: Vec<Diagnostic<'a>>,
}
