//! Evaluation of bound trees.

mod eval;

pub use eval::{Environment, Evaluator};
