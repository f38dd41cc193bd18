//! Scanner behavior over whole inputs.

mod common;
use common::*;

use sqlcheck_core::lexer::{LexicalError, Position};

#[test]
fn keywords_and_identifiers() {
    assert_eq!(
        kinds("SELECT name FROM users;"),
        vec!["SELECT", "IDENTIFIER", "FROM", "IDENTIFIER", "SEMICOLON"]
    );
}

#[test]
fn every_operator() {
    assert_eq!(
        kinds("+ - * / % = != < <= > >= ( ) , ; ."),
        vec![
            "PLUS",
            "MINUS",
            "MULTIPLY",
            "DIVIDE",
            "MODULO",
            "EQUAL",
            "NOT_EQUAL",
            "LESS_THAN",
            "LESS_EQUAL",
            "GREATER_THAN",
            "GREATER_EQUAL",
            "LPAREN",
            "RPAREN",
            "COMMA",
            "SEMICOLON",
            "DOT",
        ]
    );
}

#[test]
fn compound_operators_without_spaces() {
    assert_eq!(lexemes("a<=b>=c!=d"), vec!["a", "<=", "b", ">=", "c", "!=", "d"]);
}

#[test]
fn lone_bang_is_invalid() {
    assert_eq!(kinds("a ! b"), vec!["IDENTIFIER", "IDENTIFIER"]);
    assert_eq!(
        lexical_messages("a ! b"),
        vec!["Error: invalid character '!' at line 1, column 3."]
    );
}

#[test]
fn numbers_take_one_decimal_point() {
    assert_eq!(lexemes("1.2.3"), vec!["1.2", ".", "3"]);
    assert_eq!(kinds("1.2.3"), vec!["NUMBER_LITERAL", "DOT", "NUMBER_LITERAL"]);
    assert_eq!(lexemes("42 7."), vec!["42", "7."]);
}

#[test]
fn string_escapes() {
    let lexed = lex("'it''s' ''");
    assert_eq!(lexed.tokens.len(), 2);
    assert_eq!(lexed.tokens[0].lexeme, "it's");
    assert_eq!(lexed.tokens[1].lexeme, "");
    assert!(lexed.errors.is_empty());
}

#[test]
fn unclosed_string_keeps_partial_token() {
    let lexed = lex("SELECT 'abc");
    assert_eq!(lexed.tokens.len(), 2);
    assert_eq!(lexed.tokens[1].lexeme, "abc");
    assert_eq!(
        lexed.errors,
        vec![LexicalError::UnclosedString {
            position: Position::new(1, 8)
        }]
    );
}

#[test]
fn comments_are_skipped() {
    let source = "-- heading\nSELECT # inline # a /* block\ncomment */ FROM t; -- tail";
    assert_eq!(
        kinds(source),
        vec!["SELECT", "IDENTIFIER", "FROM", "IDENTIFIER", "SEMICOLON"]
    );
    assert!(lexical_messages(source).is_empty());
}

#[test]
fn unclosed_comments() {
    assert_eq!(
        lexical_messages("SELECT # never closed"),
        vec!["Error: unclosed comment starting at line 1, column 8."]
    );
    assert_eq!(
        lexical_messages("a\n  /* open"),
        vec!["Error: unclosed comment starting at line 2, column 3."]
    );
    assert_eq!(kinds("a /* open"), vec!["IDENTIFIER"]);
}

#[test]
fn miscased_keyword_is_reported_and_kept_as_identifier() {
    let lexed = lex("select x");
    assert_eq!(lexed.tokens[0].kind.name(), "IDENTIFIER");
    assert_eq!(
        lexed.errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
        vec!["Error: keyword 'select' must be uppercase at line 1, column 1."]
    );
    assert_eq!(lexed.identifiers["select"].count, 1);
}

#[test]
fn positions_track_lines_and_columns() {
    let lexed = lex("SELECT a\n  FROM t;");
    let positions: Vec<_> = lexed
        .tokens
        .iter()
        .map(|t| (t.position.line, t.position.column))
        .collect();
    assert_eq!(positions, vec![(1, 1), (1, 8), (2, 3), (2, 8), (2, 9)]);
}

#[test]
fn identifier_table_counts_occurrences() {
    let lexed = lex("SELECT a, b FROM t WHERE a = b AND a > 1;");
    let a = lexed.identifiers["a"];
    assert_eq!((a.line, a.column, a.count), (1, 8, 3));
    assert_eq!(lexed.identifiers["b"].count, 2);
    assert_eq!(lexed.identifiers["t"].count, 1);
    let names: Vec<_> = lexed.identifiers.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["a", "b", "t"]);
}

#[test]
fn invalid_characters_are_skipped() {
    let lexed = lex("a @ $b");
    assert_eq!(lexed.tokens.len(), 2);
    assert_eq!(lexed.errors.len(), 2);
    assert_eq!(lexed.tokens[1].lexeme, "b");
}
