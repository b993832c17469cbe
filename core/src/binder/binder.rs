//! Semantic binding: name resolution, type checking, operator resolution.

use bumpalo::Bump;
use tracing::debug;

use super::{
    bound_tree::{BoundExpr, GlobalScope},
    operators::{BinaryOp, UnaryOp},
};
use crate::{
    diagnostics::DiagnosticBag,
    scope_stack::ScopeStack,
    symbol::{SymbolId, VariableSymbol},
    syntax::tree::{ExprSyntax, SourceFile},
    value::Value,
};

/// Bind one submission against the chain of prior global scopes.
///
/// The scope chain is rebuilt from scratch on every call by replaying each
/// prior submission's declared variables, oldest outermost; nothing is
/// cached or mutated across calls. Every diagnostic is collected and every
/// node is recovered, so the returned tree is always evaluable in principle
/// (the session layer decides whether it actually runs).
pub fn bind_global_scope<'a>(
    arena: &'a Bump,
    previous: Option<&'a GlobalScope<'a>>,
    source: &SourceFile<'a>,
) -> &'a GlobalScope<'a> {
    let mut scope = ScopeStack::new();
    let mut next_symbol = 0u32;

    let mut chain = Vec::new();
    let mut link = previous;
    while let Some(global) = link {
        chain.push(global);
        link = global.previous;
    }
    for global in chain.iter().rev() {
        scope.push();
        for symbol in global.variables {
            scope.declare(symbol);
            next_symbol = next_symbol.max(symbol.id.0 + 1);
        }
    }

    // Fresh innermost layer for the submission being bound.
    scope.push();

    let mut binder = Binder {
        arena,
        scope,
        diagnostics: DiagnosticBag::new(arena),
        next_symbol,
    };
    let root = binder.bind_expression(source.body);

    let variables = arena.alloc_slice_copy(binder.scope.declared_in_current());
    let diagnostics = binder.diagnostics.into_slice();
    debug!(
        variables = variables.len(),
        diagnostics = diagnostics.len(),
        "bound submission"
    );

    arena.alloc(GlobalScope {
        previous,
        diagnostics,
        variables,
        root,
    })
}

struct Binder<'a> {
    arena: &'a Bump,
    scope: ScopeStack<'a>,
    diagnostics: DiagnosticBag<'a>,
    next_symbol: u32,
}

impl<'a> Binder<'a> {
    fn alloc(&self, node: BoundExpr<'a>) -> &'a BoundExpr<'a> {
        self.arena.alloc(node)
    }

    fn fresh_symbol_id(&mut self) -> SymbolId {
        let id = SymbolId(self.next_symbol);
        self.next_symbol += 1;
        id
    }

    fn bind_expression(&mut self, node: &ExprSyntax<'a>) -> &'a BoundExpr<'a> {
        match node {
            ExprSyntax::NumberLiteral { literal } => {
                // A token whose text failed to convert carries no value;
                // recover as zero so downstream stages keep going.
                self.alloc(BoundExpr::Literal(
                    literal.value.unwrap_or(Value::Number(0.0)),
                ))
            }
            ExprSyntax::BoolLiteral { keyword } => self.alloc(BoundExpr::Literal(
                keyword.value.unwrap_or(Value::Bool(false)),
            )),
            ExprSyntax::Parenthesized { expr, .. } => {
                let inner = self.bind_expression(expr);
                self.alloc(BoundExpr::Parenthesized(inner))
            }
            ExprSyntax::Name { identifier } => match self.scope.lookup(identifier.text) {
                Some(symbol) => self.alloc(BoundExpr::Variable(symbol)),
                None => {
                    self.diagnostics.report_undefined_identifier(identifier);
                    self.alloc(BoundExpr::Literal(Value::Number(0.0)))
                }
            },
            ExprSyntax::Assignment {
                identifier, value, ..
            } => {
                let value = self.bind_expression(value);

                let symbol = match self.scope.lookup(identifier.text) {
                    Some(existing) => existing,
                    None => {
                        let symbol = &*self.arena.alloc(VariableSymbol::new(
                            self.fresh_symbol_id(),
                            identifier.text,
                            value.ty(),
                        ));
                        self.scope.declare(symbol);
                        symbol
                    }
                };

                if value.ty() != symbol.ty {
                    self.diagnostics
                        .report_cannot_convert_type(identifier, value.ty(), symbol.ty);
                    return value;
                }

                self.alloc(BoundExpr::Assignment {
                    variable: symbol,
                    value,
                })
            }
            ExprSyntax::Prefix { operator, operand } => {
                let operand = self.bind_expression(operand);
                match UnaryOp::bind(operator.kind, operand.ty()) {
                    Some(op) => self.alloc(BoundExpr::Unary { op, operand }),
                    None => {
                        self.diagnostics
                            .report_undefined_prefix_operator(operator, operand.ty());
                        operand
                    }
                }
            }
            ExprSyntax::Infix {
                left,
                operator,
                right,
            } => {
                let left = self.bind_expression(left);
                let right = self.bind_expression(right);
                match BinaryOp::bind(operator.kind, left.ty(), right.ty()) {
                    Some(op) => self.alloc(BoundExpr::Binary { op, left, right }),
                    None => {
                        self.diagnostics.report_undefined_infix_operator(
                            operator,
                            left.ty(),
                            right.ty(),
                        );
                        left
                    }
                }
            }
        }
    }
}
