//! The annotated (bound) tree.
//!
//! One variant per syntax variant, each carrying its resolved type. Built
//! once by the binder, read-only input to the evaluator.

use super::operators::{BinaryOp, UnaryOp};
use crate::{diagnostics::Diagnostic, symbol::VariableSymbol, value::{Type, Value}};

#[derive(Debug, PartialEq)]
pub enum BoundExpr<'a> {
    Literal(Value),
    Variable(&'a VariableSymbol<'a>),
    Assignment {
        variable: &'a VariableSymbol<'a>,
        value: &'a BoundExpr<'a>,
    },
    Unary {
        op: &'static UnaryOp,
        operand: &'a BoundExpr<'a>,
    },
    Binary {
        op: &'static BinaryOp,
        left: &'a BoundExpr<'a>,
        right: &'a BoundExpr<'a>,
    },
    Parenthesized(&'a BoundExpr<'a>),
}

impl<'a> BoundExpr<'a> {
    /// The resolved type of this node.
    pub fn ty(&self) -> Type {
        match self {
            BoundExpr::Literal(value) => value.ty(),
            BoundExpr::Variable(symbol) => symbol.ty,
            BoundExpr::Assignment { value, .. } => value.ty(),
            BoundExpr::Unary { op, .. } => op.result,
            BoundExpr::Binary { op, .. } => op.result,
            BoundExpr::Parenthesized(inner) => inner.ty(),
        }
    }
}

/// One submission's persisted binding snapshot, chained to its predecessor.
///
/// `variables` holds exactly the symbols declared directly by this
/// submission; inherited ones live in earlier links. The chain of these
/// links is the whole session state the binder needs.
#[derive(Debug)]
pub struct GlobalScope<'a> {
    pub previous: Option<&'a GlobalScope<'a>>,
    pub diagnostics: &'a [Diagnostic<'a>],
    pub variables: &'a [&'a VariableSymbol<'a>],
    pub root: &'a BoundExpr<'a>,
}
