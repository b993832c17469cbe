//! The tally shell.
//!
//! Runs a reedline REPL when stdin is a terminal, otherwise evaluates each
//! line read from stdin. A single expression can also be passed as an
//! argument for one-shot evaluation.

use std::io::{BufRead, Write};

use bumpalo::Bump;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use reedline::{
    default_emacs_keybindings, DefaultPrompt, DefaultPromptSegment, Emacs, FileBackedHistory,
    Reedline, Signal,
};
use tally::render_diagnostics;
use tally_core::{Compilation, Environment};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "An interactive expression language", long_about = None)]
struct Args {
    /// Expression to evaluate; omit to read from stdin.
    expression: Option<String>,

    /// Print the syntax tree of each submission before evaluating it.
    #[arg(long)]
    show_tree: bool,
}

/// One interactive session: an arena, a variable store, and the chain of
/// successful submissions.
struct Session<'a> {
    arena: &'a Bump,
    environment: Environment,
    last: Option<&'a Compilation<'a>>,
    show_tree: bool,
    use_color: bool,
}

impl<'a> Session<'a> {
    fn new(arena: &'a Bump, show_tree: bool, use_color: bool) -> Self {
        Self {
            arena,
            environment: Environment::new(),
            last: None,
            show_tree,
            use_color,
        }
    }

    /// Compile and evaluate one line. Returns whether it succeeded.
    ///
    /// Only successful submissions become the predecessor of the next one;
    /// a failed line leaves the chain where it was.
    fn submit(&mut self, line: &str) -> bool {
        let compilation: &'a Compilation<'a> = self.arena.alloc(match self.last {
            Some(previous) => previous.continue_with(line),
            None => Compilation::new(self.arena, line),
        });

        if self.show_tree {
            print!("{}", compilation.syntax().root.tree_string());
        }

        let result = compilation.evaluate(&mut self.environment);
        debug!(
            ok = result.value.is_some(),
            diagnostics = result.diagnostics.len(),
            "submission evaluated"
        );

        match result.value {
            Some(value) => {
                println!("{value}");
                self.last = Some(compilation);
                true
            }
            None => {
                let mut stderr = std::io::stderr().lock();
                render_diagnostics(
                    compilation.syntax().source,
                    &result.diagnostics,
                    &mut stderr,
                    self.use_color,
                )
                .ok();
                stderr.flush().ok();
                false
            }
        }
    }

    /// Forget all variables and start a fresh chain.
    fn reset(&mut self) {
        self.last = None;
        self.environment.clear();
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TALLY_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let arena = Bump::new();

    if let Some(expression) = &args.expression {
        let use_color = atty::is(atty::Stream::Stderr);
        let mut session = Session::new(&arena, args.show_tree, use_color);
        if session.submit(expression) {
            return Ok(());
        }
        std::process::exit(1);
    }

    if atty::is(atty::Stream::Stdin) {
        run_repl(&arena, args.show_tree)
    } else {
        run_piped(&arena, args.show_tree)
    }
}

/// Evaluate stdin line by line, stopping at the first failure.
fn run_piped(arena: &Bump, show_tree: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let mut session = Session::new(arena, show_tree, false);

    for line in stdin.lock().lines() {
        let line = line.into_diagnostic()?;
        if line.trim().is_empty() {
            continue;
        }
        if !session.submit(&line) {
            std::process::exit(1);
        }
    }

    Ok(())
}

fn run_repl(arena: &Bump, show_tree: bool) -> Result<()> {
    let mut line_editor = setup_reedline();
    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("tally".to_string()),
        DefaultPromptSegment::Empty,
    );

    let mut session = Session::new(arena, show_tree, true);

    println!("tally — type an expression, or #exit to leave.");

    loop {
        match line_editor.read_line(&prompt) {
            Ok(Signal::Success(buffer)) => {
                let line = buffer.trim();
                match line {
                    "" => {}
                    "#exit" => break,
                    "#tree" => {
                        session.show_tree = !session.show_tree;
                        println!(
                            "{}",
                            if session.show_tree {
                                "Showing syntax trees."
                            } else {
                                "Not showing syntax trees."
                            }
                        );
                    }
                    "#reset" => {
                        session.reset();
                        println!("Session reset.");
                    }
                    "#clear" => {
                        line_editor.clear_screen().into_diagnostic()?;
                    }
                    _ => {
                        session.submit(line);
                    }
                }
            }
            Ok(Signal::CtrlC) => {
                // Discard the current line, keep the session.
                continue;
            }
            Ok(Signal::CtrlD) => break,
            Err(err) => {
                eprintln!("input error: {err}");
                break;
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn setup_reedline() -> Reedline {
    let mut line_editor =
        Reedline::create().with_edit_mode(Box::new(Emacs::new(default_emacs_keybindings())));

    if let Some(data_dir) = dirs::data_dir() {
        let history_path = data_dir.join("tally").join("history.txt");
        if let Ok(history) = FileBackedHistory::with_file(500, history_path) {
            line_editor = line_editor.with_history(Box::new(history));
        }
    }

    line_editor
}
