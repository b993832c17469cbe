//! Operator resolution tables.
//!
//! Resolution is a total function over (token kind, operand types): each
//! pair appears at most once in its table, so either exactly one entry
//! matches or none does.

use crate::{syntax::token::TokenKind, value::Type};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOpKind {
    Identity,
    Negation,
    LogicalNegation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOpKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Equals,
    NotEquals,
    LogicalAnd,
    LogicalOr,
}

/// A resolved prefix operator: which token it came from, what it does, and
/// the operand/result types it is defined for.
#[derive(Debug, PartialEq)]
pub struct UnaryOp {
    pub syntax: TokenKind,
    pub kind: UnaryOpKind,
    pub operand: Type,
    pub result: Type,
}

impl UnaryOp {
    const fn new(syntax: TokenKind, kind: UnaryOpKind, operand: Type, result: Type) -> Self {
        Self {
            syntax,
            kind,
            operand,
            result,
        }
    }

    pub fn bind(syntax: TokenKind, operand: Type) -> Option<&'static UnaryOp> {
        UNARY_OPERATORS
            .iter()
            .find(|op| op.syntax == syntax && op.operand == operand)
    }
}

const UNARY_OPERATORS: &[UnaryOp] = &[
    UnaryOp::new(TokenKind::Plus, UnaryOpKind::Identity, Type::Number, Type::Number),
    UnaryOp::new(TokenKind::Minus, UnaryOpKind::Negation, Type::Number, Type::Number),
    UnaryOp::new(TokenKind::Bang, UnaryOpKind::LogicalNegation, Type::Bool, Type::Bool),
];

/// A resolved infix operator.
#[derive(Debug, PartialEq)]
pub struct BinaryOp {
    pub syntax: TokenKind,
    pub kind: BinaryOpKind,
    pub left: Type,
    pub right: Type,
    pub result: Type,
}

impl BinaryOp {
    const fn new(
        syntax: TokenKind,
        kind: BinaryOpKind,
        left: Type,
        right: Type,
        result: Type,
    ) -> Self {
        Self {
            syntax,
            kind,
            left,
            right,
            result,
        }
    }

    pub fn bind(syntax: TokenKind, left: Type, right: Type) -> Option<&'static BinaryOp> {
        BINARY_OPERATORS
            .iter()
            .find(|op| op.syntax == syntax && op.left == left && op.right == right)
    }
}

// Equality is defined per primitive family; there is deliberately no
// (number, boolean) entry, so cross-family comparison fails to resolve.
const BINARY_OPERATORS: &[BinaryOp] = &[
    BinaryOp::new(TokenKind::Plus, BinaryOpKind::Addition, Type::Number, Type::Number, Type::Number),
    BinaryOp::new(TokenKind::Minus, BinaryOpKind::Subtraction, Type::Number, Type::Number, Type::Number),
    BinaryOp::new(TokenKind::Star, BinaryOpKind::Multiplication, Type::Number, Type::Number, Type::Number),
    BinaryOp::new(TokenKind::Slash, BinaryOpKind::Division, Type::Number, Type::Number, Type::Number),
    BinaryOp::new(TokenKind::AmpersandAmpersand, BinaryOpKind::LogicalAnd, Type::Bool, Type::Bool, Type::Bool),
    BinaryOp::new(TokenKind::PipePipe, BinaryOpKind::LogicalOr, Type::Bool, Type::Bool, Type::Bool),
    BinaryOp::new(TokenKind::EqualsEquals, BinaryOpKind::Equals, Type::Number, Type::Number, Type::Bool),
    BinaryOp::new(TokenKind::EqualsEquals, BinaryOpKind::Equals, Type::Bool, Type::Bool, Type::Bool),
    BinaryOp::new(TokenKind::BangEquals, BinaryOpKind::NotEquals, Type::Number, Type::Number, Type::Bool),
    BinaryOp::new(TokenKind::BangEquals, BinaryOpKind::NotEquals, Type::Bool, Type::Bool, Type::Bool),
];
