//! Pipeline results and their serializable report.

use serde::Serialize;

use crate::cst::TreeView;
use crate::lexer::{IdentifierTable, Lexed, LexicalError, Lexer, Position, TokenTuple};
use crate::parser::{Parsed, Parser, SyntaxError};
use crate::semantic::{annotated_tree, Schema, SemanticAnalyzer, SemanticError, SemanticOutput};

/// The phase that reported a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reported by the scanner.
    Lexical,
    /// Reported by the parser.
    Syntax,
    /// Reported by the semantic analyzer.
    Semantic,
}

/// A diagnostic from any phase, in uniform shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The reporting phase.
    pub severity: Severity,
    /// The full message.
    pub message: String,
    /// Where the problem is, when known.
    pub position: Option<Position>,
}

impl From<&LexicalError> for Diagnostic {
    fn from(err: &LexicalError) -> Self {
        Self {
            severity: Severity::Lexical,
            message: err.to_string(),
            position: Some(err.position()),
        }
    }
}

impl From<&SyntaxError> for Diagnostic {
    fn from(err: &SyntaxError) -> Self {
        Self {
            severity: Severity::Syntax,
            message: err.to_string(),
            position: err.position(),
        }
    }
}

impl From<&SemanticError> for Diagnostic {
    fn from(err: &SemanticError) -> Self {
        Self {
            severity: Severity::Semantic,
            message: err.to_string(),
            position: Some(err.position()),
        }
    }
}

/// Everything one run of the pipeline produced.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Scanner output.
    pub lexed: Lexed,
    /// Parser output.
    pub parsed: Parsed,
    /// Semantic analyzer output.
    pub semantic: SemanticOutput,
}

impl Analysis {
    /// Runs the scanner, the parser and the semantic analyzer in turn.
    ///
    /// Every phase runs regardless of errors in earlier ones.
    #[must_use]
    pub fn run(source: &str) -> Self {
        let lexed = Lexer::new(source).tokenize();
        let parsed = Parser::new(&lexed.tokens).parse();
        let semantic = SemanticAnalyzer::new(&parsed.tree, &lexed.tokens).analyze();
        Self {
            lexed,
            parsed,
            semantic,
        }
    }

    /// Returns true when no phase reported an error.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.lexed.errors.is_empty()
            && self.parsed.errors.is_empty()
            && self.semantic.errors.is_empty()
    }

    /// Total number of errors across phases.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.lexed.errors.len() + self.parsed.errors.len() + self.semantic.errors.len()
    }

    /// Every diagnostic: lexical first, then syntax, then semantic, each in
    /// source order.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lexed
            .errors
            .iter()
            .map(Diagnostic::from)
            .chain(self.parsed.errors.iter().map(Diagnostic::from))
            .chain(self.semantic.errors.iter().map(Diagnostic::from))
            .collect()
    }

    /// The final schema.
    #[must_use]
    pub const fn schema(&self) -> &Schema {
        &self.semantic.schema
    }

    /// Text listing of the schema.
    #[must_use]
    pub fn symbol_table_dump(&self) -> String {
        self.semantic.schema.dump()
    }

    /// The syntax tree drawn with resolved types.
    #[must_use]
    pub fn annotated_tree(&self) -> String {
        annotated_tree(&self.parsed.tree, &self.semantic.schema)
    }

    /// Builds the serializable report.
    #[must_use]
    pub fn report(&self) -> AnalysisReport<'_> {
        let lexer = LexerReport {
            errors: messages(&self.lexed.errors),
            tokens: self.lexed.tokens.iter().map(crate::lexer::Token::to_tuple).collect(),
            symbols: &self.lexed.identifiers,
            token_count: self.lexed.tokens.len(),
            identifier_count: self.lexed.identifiers.len(),
        };
        let parser = ParserReport {
            errors: messages(&self.parsed.errors),
            tree: TreeView::of(&self.parsed.tree),
        };
        let semantic = SemanticReport {
            errors: messages(&self.semantic.errors),
            symbol_table: &self.semantic.schema,
            symbol_table_dump: self.symbol_table_dump(),
            annotated_tree: self.annotated_tree(),
        };
        let summary = Summary {
            lexical_errors: lexer.errors.len(),
            syntax_errors: parser.errors.len(),
            semantic_errors: semantic.errors.len(),
            success: self.is_success(),
        };
        AnalysisReport {
            lexer,
            parser,
            semantic,
            summary,
        }
    }
}

fn messages<E: ToString>(errors: &[E]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

/// The full result of an analysis in its serializable form.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport<'a> {
    /// Scanner section.
    pub lexer: LexerReport<'a>,
    /// Parser section.
    pub parser: ParserReport,
    /// Semantic section.
    pub semantic: SemanticReport<'a>,
    /// Error counts and the overall verdict.
    pub summary: Summary,
}

/// Scanner section of the report.
#[derive(Debug, Clone, Serialize)]
pub struct LexerReport<'a> {
    /// Lexical error messages.
    pub errors: Vec<String>,
    /// Tokens as `(kind, lexeme, line, column)`.
    pub tokens: Vec<TokenTuple>,
    /// Identifier occurrence table.
    pub symbols: &'a IdentifierTable,
    /// Number of tokens.
    pub token_count: usize,
    /// Number of distinct identifiers.
    pub identifier_count: usize,
}

/// Parser section of the report.
#[derive(Debug, Clone, Serialize)]
pub struct ParserReport {
    /// Syntax error messages.
    pub errors: Vec<String>,
    /// The syntax tree as nested `{name, children}`.
    pub tree: TreeView,
}

/// Semantic section of the report.
#[derive(Debug, Clone, Serialize)]
pub struct SemanticReport<'a> {
    /// Semantic error messages.
    pub errors: Vec<String>,
    /// The schema as `{table: {column: type}}`.
    pub symbol_table: &'a Schema,
    /// Text listing of the schema.
    pub symbol_table_dump: String,
    /// The tree drawn with resolved types.
    pub annotated_tree: String,
}

/// Error counts per phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of lexical errors.
    pub lexical_errors: usize,
    /// Number of syntax errors.
    pub syntax_errors: usize,
    /// Number of semantic errors.
    pub semantic_errors: usize,
    /// True when all three counts are zero.
    pub success: bool,
}
