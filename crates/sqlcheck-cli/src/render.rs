//! Human-readable and JSON renderings of an analysis.

use std::fmt::Write as _;

use sqlcheck_core::cst::TreeText;
use sqlcheck_core::Analysis;

use crate::error::Result;

/// Output format of the `analyze` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// Sectioned text report.
    #[default]
    Text,
    /// The serialized report as pretty-printed JSON.
    Json,
}

/// Renders an analysis in the requested format.
pub fn render(analysis: &Analysis, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(render_text(analysis)),
        Format::Json => render_json(analysis),
    }
}

/// Pretty-printed JSON of [`Analysis::report`].
pub fn render_json(analysis: &Analysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(&analysis.report())?)
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n=== {title} ===");
}

fn error_section(out: &mut String, title: &str, errors: &[String]) {
    heading(out, title);
    if errors.is_empty() {
        out.push_str("(none)\n");
    }
    for error in errors {
        let _ = writeln!(out, "{error}");
    }
}

/// Sectioned text report: tokens, identifiers, each phase's errors, the
/// parse tree, the schema, the annotated tree and a summary.
#[must_use]
pub fn render_text(analysis: &Analysis) -> String {
    let report = analysis.report();
    let mut out = String::new();

    heading(&mut out, &format!("Tokens ({})", report.lexer.token_count));
    for token in &report.lexer.tokens {
        let _ = writeln!(
            out,
            "{:>4}:{:<4} {:<15} {}",
            token.2, token.3, token.0, token.1
        );
    }

    heading(
        &mut out,
        &format!("Identifiers ({})", report.lexer.identifier_count),
    );
    for (name, entry) in report.lexer.symbols {
        let _ = writeln!(
            out,
            "{name}: first seen at line {}, column {}, {} occurrence(s)",
            entry.line, entry.column, entry.count
        );
    }

    error_section(&mut out, "Lexical Errors", &report.lexer.errors);
    error_section(&mut out, "Syntax Errors", &report.parser.errors);

    heading(&mut out, "Parse Tree");
    let _ = write!(out, "{}", TreeText(&analysis.parsed.tree));

    error_section(&mut out, "Semantic Errors", &report.semantic.errors);
    out.push_str(&report.semantic.symbol_table_dump);
    out.push_str(&report.semantic.annotated_tree);

    let summary = report.summary;
    heading(&mut out, "Summary");
    let _ = writeln!(out, "Lexical errors:  {}", summary.lexical_errors);
    let _ = writeln!(out, "Syntax errors:   {}", summary.syntax_errors);
    let _ = writeln!(out, "Semantic errors: {}", summary.semantic_errors);
    let verdict = if summary.success { "SUCCESS" } else { "FAILED" };
    let _ = writeln!(out, "Result: {verdict}");
    out
}
