//! tally-core — the compilation pipeline for the tally expression language.
//!
//! Source text flows through a hand-written lexer, a precedence-climbing
//! parser, a scope-aware binder, and a tree-walking evaluator:
//!
//! ```text
//! text -> Lexer -> tokens -> Parser -> syntax tree (+ diagnostics)
//!      -> Binder (consuming the prior global scope) -> bound tree
//!      -> Evaluator (mutating the runtime environment) -> Value
//! ```
//!
//! Sessions are a chain of [`Compilation`]s sharing one caller-owned arena;
//! variables declared in earlier submissions stay visible in later ones.
//! Problems are collected [`Diagnostic`]s, never panics; when a submission
//! has any, it is not evaluated.
//!
//! ```ignore
//! use bumpalo::Bump;
//! use tally_core::{Compilation, evaluator::Environment};
//!
//! let arena = Bump::new();
//! let mut environment = Environment::new();
//!
//! let first = arena.alloc(Compilation::new(&arena, "x = 10"));
//! first.evaluate(&mut environment);
//!
//! let second = first.continue_with("x * 2");
//! let result = second.evaluate(&mut environment);
//! assert_eq!(result.value.unwrap().to_string(), "20");
//! ```

pub mod binder;
pub mod compilation;
pub mod diagnostics;
pub mod evaluator;
pub mod scope_stack;
pub mod symbol;
pub mod syntax;
pub mod text;
pub mod value;

pub use compilation::{Compilation, EvaluationResult};
pub use diagnostics::Diagnostic;
pub use evaluator::Environment;
pub use text::Span;
pub use value::{Type, Value};
