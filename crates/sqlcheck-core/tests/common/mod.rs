#![allow(dead_code)]

use sqlcheck_core::cst::{Query, StatementBody};
use sqlcheck_core::lexer::{Lexed, Lexer};
use sqlcheck_core::{analyze, Analysis, Parsed, Parser};

pub fn lex(source: &str) -> Lexed {
    Lexer::new(source).tokenize()
}

/// Token kind names, in order.
pub fn kinds(source: &str) -> Vec<&'static str> {
    lex(source).tokens.iter().map(|t| t.kind.name()).collect()
}

pub fn lexemes(source: &str) -> Vec<String> {
    lex(source).tokens.into_iter().map(|t| t.lexeme).collect()
}

pub fn lexical_messages(source: &str) -> Vec<String> {
    lex(source).errors.iter().map(ToString::to_string).collect()
}

pub fn parse(source: &str) -> Parsed {
    let lexed = lex(source);
    Parser::new(&lexed.tokens).parse()
}

pub fn parse_ok(source: &str) -> Query {
    let parsed = parse(source);
    assert!(
        parsed.errors.is_empty(),
        "Unexpected syntax errors for: {source}\n{:?}",
        parsed.errors
    );
    parsed.tree
}

pub fn parse_one(source: &str) -> StatementBody {
    let tree = parse_ok(source);
    let mut statements: Vec<_> = tree.statements().cloned().collect();
    assert_eq!(statements.len(), 1, "Expected one statement in: {source}");
    statements.remove(0).body
}

pub fn syntax_messages(source: &str) -> Vec<String> {
    parse(source).errors.iter().map(ToString::to_string).collect()
}

pub fn semantic_messages(source: &str) -> Vec<String> {
    analyze(source)
        .semantic
        .errors
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Runs the pipeline and asserts that scanning and parsing were clean.
pub fn analyze_clean_syntax(source: &str) -> Analysis {
    let analysis = analyze(source);
    assert!(
        analysis.lexed.errors.is_empty() && analysis.parsed.errors.is_empty(),
        "Unexpected lexical or syntax errors for: {source}\n{:?}\n{:?}",
        analysis.lexed.errors,
        analysis.parsed.errors
    );
    analysis
}
