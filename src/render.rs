//! Diagnostic rendering built on ariadne.
//!
//! The core collects diagnostics as plain message/span pairs; this module
//! turns them into labeled source-snippet reports for the shell.

use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

use tally_core::Diagnostic;

const SOURCE_ID: &str = "<repl>";

/// Render each diagnostic as a labeled report against `source`.
pub fn render_diagnostics(
    source: &str,
    diagnostics: &[Diagnostic<'_>],
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    for diagnostic in diagnostics {
        let mut colors = ColorGenerator::new();
        let color = colors.next();
        let span = diagnostic.span.start..diagnostic.span.end;

        Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
            .with_message(diagnostic.message)
            .with_config(ariadne::Config::default().with_color(use_color))
            .with_label(
                Label::new((SOURCE_ID, span))
                    .with_message(diagnostic.message)
                    .with_color(color),
            )
            .finish()
            .write((SOURCE_ID, Source::from(source)), &mut *writer)?;
    }

    Ok(())
}

/// Render to a `String`, without color codes. Useful for tests and embedders.
pub fn render_diagnostics_to_string(source: &str, diagnostics: &[Diagnostic<'_>]) -> String {
    let mut buf = Vec::new();
    render_diagnostics(source, diagnostics, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}
