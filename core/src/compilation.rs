//! Session orchestration: one submission through the whole pipeline.

use bumpalo::Bump;
use once_cell::unsync::OnceCell;
use tracing::debug;

use crate::{
    binder::{bind_global_scope, GlobalScope},
    diagnostics::Diagnostic,
    evaluator::{Environment, Evaluator},
    syntax::{parse, SyntaxTree},
    value::Value,
};

/// One submission of a session, chained to the previous one.
///
/// Lexing and parsing happen eagerly in [`Compilation::new`]; binding is
/// deferred and memoized, so a compilation that is never evaluated never
/// pays for it. The session arena is owned by the caller and threaded
/// through every link, exactly like the rest of the pipeline.
///
/// Chaining is the caller's job: keep the last *successful* compilation and
/// build the next one with [`Compilation::continue_with`]. A failed
/// submission must not become the predecessor of the next one, or a
/// partially bound symbol could pollute later scope resolution.
pub struct Compilation<'a> {
    arena: &'a Bump,
    syntax: SyntaxTree<'a>,
    previous: Option<&'a Compilation<'a>>,
    global_scope: OnceCell<&'a GlobalScope<'a>>,
}

impl<'a> Compilation<'a> {
    pub fn new(arena: &'a Bump, text: &str) -> Compilation<'a> {
        let source = &*arena.alloc_str(text);
        Compilation {
            arena,
            syntax: parse(arena, source),
            previous: None,
            global_scope: OnceCell::new(),
        }
    }

    /// A new compilation that extends this one's scope.
    pub fn continue_with(&'a self, text: &str) -> Compilation<'a> {
        Compilation {
            previous: Some(self),
            ..Compilation::new(self.arena, text)
        }
    }

    pub fn syntax(&self) -> &SyntaxTree<'a> {
        &self.syntax
    }

    /// This submission's binding snapshot, computed on first access.
    pub fn global_scope(&'a self) -> &'a GlobalScope<'a> {
        self.global_scope.get_or_init(|| {
            let previous = self.previous.map(|compilation| compilation.global_scope());
            bind_global_scope(self.arena, previous, &self.syntax.root)
        })
    }

    /// Run the submission.
    ///
    /// Diagnostics from lexing, parsing, and binding are concatenated in
    /// that order; if any exist, evaluation is skipped and `value` is
    /// `None`. On success the environment has been updated in place.
    pub fn evaluate(&'a self, environment: &mut Environment) -> EvaluationResult<'a> {
        let scope = self.global_scope();

        let mut diagnostics = self.syntax.diagnostics.clone();
        diagnostics.extend_from_slice(scope.diagnostics);

        if !diagnostics.is_empty() {
            debug!(diagnostics = diagnostics.len(), "submission not evaluated");
            return EvaluationResult {
                value: None,
                diagnostics,
            };
        }

        let value = Evaluator::new(environment).evaluate(scope.root);
        EvaluationResult {
            value: Some(value),
            diagnostics,
        }
    }
}

/// The outcome of one submission: a value on success, diagnostics otherwise.
#[derive(Debug)]
pub struct EvaluationResult<'a> {
    pub value: Option<Value>,
    pub diagnostics: Vec<Diagnostic<'a>>,
}
