//! tally — an interactive expression language.
//!
//! This crate is the embedder-facing facade over [`tally_core`]: it re-exports
//! the compilation pipeline, adds ariadne-based diagnostic rendering, and
//! offers a one-shot [`evaluate`] for callers that don't need a session.
//!
//! ```ignore
//! let value = tally::evaluate("1 + 2 * 4")?;
//! assert_eq!(value.to_string(), "9");
//! ```
//!
//! For sessions with persistent variables, use [`Compilation`] directly with
//! a caller-owned [`bumpalo::Bump`] arena and an [`Environment`].

use bumpalo::Bump;
use thiserror::Error;

pub use tally_core::{
    Compilation, Diagnostic, Environment, EvaluationResult, Span, Type, Value,
};

mod render;

pub use render::{render_diagnostics, render_diagnostics_to_string};

/// A diagnostic detached from the session arena, safe to keep after the
/// compilation that produced it is gone.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedDiagnostic {
    pub message: String,
    pub span: Span,
}

impl OwnedDiagnostic {
    fn from_diagnostic(diagnostic: &Diagnostic<'_>) -> Self {
        Self {
            message: diagnostic.message.to_string(),
            span: diagnostic.span,
        }
    }
}

/// What can go wrong when evaluating a submission.
#[derive(Debug, Error)]
pub enum Error {
    /// The submission had lexical, syntactic, or semantic problems and was
    /// not evaluated.
    #[error("submission has {} problem(s): {}", .0.len(), first_message(.0))]
    Diagnostics(Vec<OwnedDiagnostic>),
}

fn first_message(diagnostics: &[OwnedDiagnostic]) -> &str {
    diagnostics
        .first()
        .map(|d| d.message.as_str())
        .unwrap_or("no details")
}

/// Evaluate a single expression in a fresh session.
pub fn evaluate(text: &str) -> Result<Value, Error> {
    let arena = Bump::new();
    let mut environment = Environment::new();

    let compilation = Compilation::new(&arena, text);
    let result = compilation.evaluate(&mut environment);

    match result.value {
        Some(value) => Ok(value),
        None => Err(Error::Diagnostics(
            result
                .diagnostics
                .iter()
                .map(OwnedDiagnostic::from_diagnostic)
                .collect(),
        )),
    }
}
