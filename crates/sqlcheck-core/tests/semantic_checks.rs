//! Tests for schema registration and statement checks.

mod common;
use common::*;

use sqlcheck_core::semantic::ColumnType;
use sqlcheck_core::{analyze, SemanticError};

#[test]
fn create_then_insert_is_clean() {
    let analysis = analyze_clean_syntax("CREATE TABLE t (a INT, b TEXT); INSERT INTO t VALUES (1, 'x');");
    assert!(analysis.is_success());
    let table = analysis.schema().table("t").expect("table t");
    let columns: Vec<_> = table.columns().map(|(n, ty)| (n, ty.clone())).collect();
    assert_eq!(
        columns,
        vec![("a", ColumnType::Int), ("b", ColumnType::Text)]
    );
}

#[test]
fn duplicate_table_keeps_first_definition() {
    let analysis = analyze_clean_syntax("CREATE TABLE t (a INT); CREATE TABLE t (b TEXT);");
    assert_eq!(analysis.semantic.errors.len(), 1);
    assert!(matches!(
        &analysis.semantic.errors[0],
        SemanticError::DuplicateTable { table, .. } if table == "t"
    ));
    let table = analysis.schema().table("t").expect("table t");
    assert_eq!(table.len(), 1);
    assert_eq!(table.column("a"), Some(&ColumnType::Int));
    assert_eq!(table.column("b"), None);
}

#[test]
fn select_from_missing_table() {
    assert_eq!(
        semantic_messages("SELECT * FROM missing;"),
        vec!["Semantic Error: Table 'missing' is not declared at line 1, column 15."]
    );
}

#[test]
fn every_statement_checks_its_table() {
    let messages = semantic_messages(
        "INSERT INTO a VALUES (1);\nUPDATE b SET x = 1;\nDELETE FROM c;\nSELECT y FROM d;",
    );
    assert_eq!(
        messages,
        vec![
            "Semantic Error: Table 'a' is not declared at line 1, column 13.",
            "Semantic Error: Table 'b' is not declared at line 2, column 8.",
            "Semantic Error: Table 'c' is not declared at line 3, column 13.",
            "Semantic Error: Table 'd' is not declared at line 4, column 15.",
        ]
    );
}

#[test]
fn insert_arity_mismatch_skips_value_checks() {
    let messages = semantic_messages("CREATE TABLE t (a INT, b INT); INSERT INTO t VALUES ('x');");
    assert_eq!(
        messages,
        vec!["Semantic Error: Type mismatch at line 1, column 14. Table 't' expects 2 values, but 1 were provided."]
    );
}

#[test]
fn insert_too_many_values() {
    let messages = semantic_messages("CREATE TABLE t (a INT); INSERT INTO t VALUES (1, 2, 3);");
    assert_eq!(
        messages,
        vec!["Semantic Error: Type mismatch at line 1, column 14. Table 't' expects 1 values, but 3 were provided."]
    );
}

#[test]
fn float_accepts_integers_but_int_rejects_decimals() {
    let messages = semantic_messages(
        "CREATE TABLE t (f FLOAT, i INT);\nINSERT INTO t VALUES (3, 2.0);",
    );
    assert_eq!(
        messages,
        vec!["Semantic Error: Type mismatch at line 2, column 26. Column 'i' is defined as INT, but a NUMBER_LITERAL literal was provided for insertion."]
    );
}

#[test]
fn text_rejects_numbers_on_insert() {
    let messages = semantic_messages("CREATE TABLE t (s TEXT);\nINSERT INTO t VALUES (7);");
    assert_eq!(
        messages,
        vec!["Semantic Error: Type mismatch at line 2, column 23. Column 's' is defined as TEXT, but a NUMBER_LITERAL literal was provided for insertion."]
    );
}

#[test]
fn update_string_into_int() {
    let analysis = analyze_clean_syntax("CREATE TABLE t (a INT); UPDATE t SET a = 'x';");
    assert_eq!(analysis.semantic.errors.len(), 1);
    assert!(matches!(
        &analysis.semantic.errors[0],
        SemanticError::TypeMismatch { declared: ColumnType::Int, .. }
    ));
    assert_eq!(
        analysis.semantic.errors[0].to_string(),
        "Semantic Error: Type mismatch at line 1, column 42. Column 'a' is defined as INT, but a STRING_LITERAL was provided."
    );
}

#[test]
fn update_expression_is_not_typed() {
    assert!(semantic_messages("CREATE TABLE t (a INT); UPDATE t SET a = 'x' + 1;").is_empty());
    assert!(semantic_messages("CREATE TABLE t (a INT, b TEXT); UPDATE t SET a = b;").is_empty());
}

#[test]
fn update_unknown_column() {
    assert_eq!(
        semantic_messages("CREATE TABLE t (a INT);\nUPDATE t SET nope = 1 WHERE a = 1;"),
        vec!["Semantic Error: Column 'nope' does not exist in table 't' at line 2, column 14."]
    );
}

#[test]
fn select_reports_each_unknown_column() {
    assert_eq!(
        semantic_messages("CREATE TABLE t (a INT);\nSELECT a, x, y * 2 FROM t;"),
        vec![
            "Semantic Error: Column 'x' does not exist in table 't' at line 2, column 11.",
            "Semantic Error: Column 'y' does not exist in table 't' at line 2, column 14.",
        ]
    );
}

#[test]
fn select_literals_are_not_columns() {
    assert!(semantic_messages("CREATE TABLE t (a INT); SELECT 1, 'two', a FROM t;").is_empty());
}

#[test]
fn comparison_checks_left_column_and_right_literal() {
    assert_eq!(
        semantic_messages("CREATE TABLE t (a INT, s TEXT);\nDELETE FROM t WHERE s = 1 OR a = 2.5;"),
        vec![
            "Semantic Error: Type mismatch at line 2, column 25. Column 's' is defined as TEXT, but a NUMBER literal was used in comparison.",
            "Semantic Error: Type mismatch at line 2, column 34. Column 'a' is defined as INT, but a NUMBER literal was used in comparison.",
        ]
    );
}

#[test]
fn comparison_with_unknown_column_skips_type_check() {
    assert_eq!(
        semantic_messages("CREATE TABLE t (a INT);\nSELECT * FROM t WHERE b = 'x';"),
        vec!["Semantic Error: Column 'b' does not exist in table 't' at line 2, column 23."]
    );
}

#[test]
fn comparison_without_column_on_the_left_is_unchecked() {
    assert!(semantic_messages("CREATE TABLE t (a INT); SELECT * FROM t WHERE 'x' = a;").is_empty());
    assert!(semantic_messages("CREATE TABLE t (a INT); SELECT * FROM t WHERE (a) = 'x';").is_empty());
}

#[test]
fn comparison_between_columns_is_unchecked() {
    assert!(semantic_messages("CREATE TABLE t (a INT, s TEXT); SELECT * FROM t WHERE a = s;").is_empty());
}

#[test]
fn boolean_column_must_exist() {
    assert_eq!(
        semantic_messages("CREATE TABLE t (a INT); DELETE FROM t WHERE NOT active;"),
        vec!["Semantic Error: Column 'active' does not exist in table 't' at line 1, column 49."]
    );
}

#[test]
fn forward_references_resolve() {
    assert!(semantic_messages("SELECT a FROM t; CREATE TABLE t (a INT);").is_empty());
}

#[test]
fn statements_with_syntax_errors_are_not_analyzed() {
    let analysis = analyze("CREATE TABLE t (a INT); INSERT INTO t VALUES ('x';");
    assert_eq!(analysis.parsed.errors.len(), 1);
    assert!(analysis.semantic.errors.is_empty());
}

#[test]
fn positions_use_first_occurrence_of_the_name() {
    let messages = semantic_messages("SELECT * FROM ghost;\nSELECT * FROM ghost;");
    assert_eq!(
        messages,
        vec![
            "Semantic Error: Table 'ghost' is not declared at line 1, column 15.",
            "Semantic Error: Table 'ghost' is not declared at line 1, column 15.",
        ]
    );
}
