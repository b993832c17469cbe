//! Semantic analysis: scope reconstruction, name resolution, type checking.

mod binder;
pub mod bound_tree;
pub mod operators;

pub use binder::bind_global_scope;
pub use bound_tree::{BoundExpr, GlobalScope};
pub use operators::{BinaryOp, BinaryOpKind, UnaryOp, UnaryOpKind};
