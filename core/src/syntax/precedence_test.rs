//! Associativity and precedence properties over the whole operator table.

use bumpalo::Bump;
use pretty_assertions::assert_eq;

use super::facts::{infix_precedence, operator_text, prefix_precedence, INFIX_OPERATORS, PREFIX_OPERATORS};
use super::parser::parse;
use super::token::TokenKind;
use super::tree::ExprSyntax;

fn root<'a>(arena: &'a Bump, source: &str) -> &'a ExprSyntax<'a> {
    let source = &*arena.alloc_str(source);
    let tree = parse(arena, source);
    assert!(
        tree.diagnostics.is_empty(),
        "unexpected diagnostics for {source:?}: {:?}",
        tree.diagnostics
    );
    tree.root.body
}

/// For `a OP1 b OP2 c`, the pair nests left when OP1 binds at least as
/// tightly as OP2, right otherwise.
#[test]
fn every_infix_pair_nests_by_precedence() {
    for &op1 in INFIX_OPERATORS {
        for &op2 in INFIX_OPERATORS {
            let source = format!(
                "a {} b {} c",
                operator_text(op1),
                operator_text(op2)
            );
            let arena = Bump::new();
            let body = root(&arena, &source);

            let ExprSyntax::Infix {
                left,
                operator,
                right,
            } = body
            else {
                panic!("expected an infix root for {source:?}, got {body:?}");
            };

            if infix_precedence(op1) >= infix_precedence(op2) {
                // ((a OP1 b) OP2 c)
                assert_eq!(operator.kind, op2, "{source}");
                let ExprSyntax::Infix { operator: inner, right: b, .. } = left else {
                    panic!("expected a left-nested pair for {source:?}");
                };
                assert_eq!(inner.kind, op1, "{source}");
                assert!(matches!(b, ExprSyntax::Name { identifier } if identifier.text == "b"));
                assert!(matches!(right, ExprSyntax::Name { identifier } if identifier.text == "c"));
            } else {
                // (a OP1 (b OP2 c))
                assert_eq!(operator.kind, op1, "{source}");
                assert!(matches!(left, ExprSyntax::Name { identifier } if identifier.text == "a"));
                let ExprSyntax::Infix { operator: inner, left: b, .. } = right else {
                    panic!("expected a right-nested pair for {source:?}");
                };
                assert_eq!(inner.kind, op2, "{source}");
                assert!(matches!(b, ExprSyntax::Name { identifier } if identifier.text == "b"));
            }
        }
    }
}

/// A prefix operator binds tighter than any infix operator following its
/// operand: `OP a * b` is `(OP a) * b`.
#[test]
fn prefix_binds_tighter_than_infix() {
    for &prefix in PREFIX_OPERATORS {
        for &infix in INFIX_OPERATORS {
            let source = format!(
                "{} a {} b",
                operator_text(prefix),
                operator_text(infix)
            );
            let arena = Bump::new();
            let body = root(&arena, &source);

            let ExprSyntax::Infix { left, operator, .. } = body else {
                panic!("expected an infix root for {source:?}, got {body:?}");
            };
            assert_eq!(operator.kind, infix, "{source}");
            assert!(
                matches!(left, ExprSyntax::Prefix { operator, .. } if operator.kind == prefix),
                "{source}"
            );
        }
    }
}

#[test]
fn prefix_operators_stack() {
    let arena = Bump::new();
    let body = root(&arena, "-+1");
    let ExprSyntax::Prefix { operator, operand } = body else {
        panic!("expected a prefix root, got {body:?}");
    };
    assert_eq!(operator.kind, TokenKind::Minus);
    assert!(
        matches!(operand, ExprSyntax::Prefix { operator, .. } if operator.kind == TokenKind::Plus)
    );
}

#[test]
fn equal_precedence_chains_are_left_associative() {
    let arena = Bump::new();
    let body = root(&arena, "a - b + c - d");

    // (((a - b) + c) - d)
    let ExprSyntax::Infix { left, operator, .. } = body else {
        panic!("expected an infix root, got {body:?}");
    };
    assert_eq!(operator.kind, TokenKind::Minus);
    let ExprSyntax::Infix { left, operator, .. } = left else {
        panic!("expected a nested infix");
    };
    assert_eq!(operator.kind, TokenKind::Plus);
    let ExprSyntax::Infix { operator, .. } = left else {
        panic!("expected a nested infix");
    };
    assert_eq!(operator.kind, TokenKind::Minus);
}

#[test]
fn parentheses_override_precedence() {
    let arena = Bump::new();
    let body = root(&arena, "(a + b) * c");
    let ExprSyntax::Infix { left, operator, .. } = body else {
        panic!("expected an infix root, got {body:?}");
    };
    assert_eq!(operator.kind, TokenKind::Star);
    assert!(matches!(left, ExprSyntax::Parenthesized { .. }));
}

/// Every nonzero precedence pairing in the tables is consistent with the
/// grammar: multiplicative over additive over equality over conjunction over
/// disjunction, prefix above all.
#[test]
fn precedence_tables_are_ordered() {
    assert!(infix_precedence(TokenKind::Star) > infix_precedence(TokenKind::Plus));
    assert!(infix_precedence(TokenKind::Plus) > infix_precedence(TokenKind::EqualsEquals));
    assert!(
        infix_precedence(TokenKind::EqualsEquals)
            > infix_precedence(TokenKind::AmpersandAmpersand)
    );
    assert!(
        infix_precedence(TokenKind::AmpersandAmpersand) > infix_precedence(TokenKind::PipePipe)
    );
    for &kind in PREFIX_OPERATORS {
        assert!(prefix_precedence(kind) > infix_precedence(TokenKind::Star));
    }
}
