//! The tree-walking evaluator.

use hashbrown::HashMap;

use crate::{
    binder::bound_tree::BoundExpr,
    binder::operators::{BinaryOpKind, UnaryOpKind},
    symbol::SymbolId,
    value::Value,
};

/// The runtime variable store, keyed by symbol handle.
///
/// Owned by the caller and threaded through every submission of a session,
/// so values persist across evaluations while shadowed rebindings (which get
/// fresh symbols) land in distinct slots.
pub type Environment = HashMap<SymbolId, Value>;

/// Walks a bound tree and computes its value, mutating only the environment.
///
/// The binder is the sole gate for user-level errors: by the time a tree
/// reaches this point every name resolves and every operator is defined for
/// its operand types. Anything else here is an internal invariant violation
/// and panics.
pub struct Evaluator<'env> {
    environment: &'env mut Environment,
}

impl<'env> Evaluator<'env> {
    pub fn new(environment: &'env mut Environment) -> Self {
        Self { environment }
    }

    pub fn evaluate(&mut self, root: &BoundExpr<'_>) -> Value {
        self.eval_expression(root)
    }

    fn eval_expression(&mut self, expr: &BoundExpr<'_>) -> Value {
        match expr {
            BoundExpr::Literal(value) => *value,

            BoundExpr::Variable(symbol) => match self.environment.get(&symbol.id) {
                Some(value) => *value,
                None => unreachable!(
                    "variable '{}' has no environment slot; the binder resolved a symbol \
                     that was never assigned",
                    symbol.name
                ),
            },

            BoundExpr::Assignment { variable, value } => {
                let value = self.eval_expression(value);
                self.environment.insert(variable.id, value);
                value
            }

            BoundExpr::Parenthesized(inner) => self.eval_expression(inner),

            BoundExpr::Unary { op, operand } => {
                let operand = self.eval_expression(operand);
                match op.kind {
                    UnaryOpKind::Identity => operand,
                    UnaryOpKind::Negation => Value::Number(-operand.as_number()),
                    UnaryOpKind::LogicalNegation => Value::Bool(!operand.as_bool()),
                }
            }

            BoundExpr::Binary { op, left, right } => {
                // Both operands are always evaluated; the binder already
                // guarantees boolean operands for && and ||, so there is no
                // short-circuit semantics to preserve.
                let left = self.eval_expression(left);
                let right = self.eval_expression(right);
                match op.kind {
                    BinaryOpKind::Addition => Value::Number(left.as_number() + right.as_number()),
                    BinaryOpKind::Subtraction => {
                        Value::Number(left.as_number() - right.as_number())
                    }
                    BinaryOpKind::Multiplication => {
                        Value::Number(left.as_number() * right.as_number())
                    }
                    // IEEE-754: division by zero is an infinity, not an error.
                    BinaryOpKind::Division => Value::Number(left.as_number() / right.as_number()),
                    BinaryOpKind::LogicalAnd => Value::Bool(left.as_bool() && right.as_bool()),
                    BinaryOpKind::LogicalOr => Value::Bool(left.as_bool() || right.as_bool()),
                    BinaryOpKind::Equals => Value::Bool(left == right),
                    BinaryOpKind::NotEquals => Value::Bool(left != right),
                }
            }
        }
    }
}
