#![cfg(feature = "cli")]

use woql_unparse::cli::{execute_render, CliError, RenderOptions};

fn options(input: &str) -> RenderOptions {
    RenderOptions {
        input: input.to_string(),
        dialect: "js".to_string(),
        vocab: None,
    }
}

#[test]
fn test_render_from_json_string() {
    let input = r#"{"@type": "woql:Variable", "woql:variable_name": {"@value": "x"}}"#;
    assert_eq!(execute_render(&options(input)).unwrap(), "\"v:x\"");
}

#[test]
fn test_dialect_selector_is_forwarded() {
    let input = r#"{
        "@type": "woql:Triple",
        "woql:subject": "doc:a",
        "woql:predicate": "scm:p",
        "woql:object": "o"
    }"#;
    let mut opts = options(input);
    opts.dialect = "python".to_string();
    assert_eq!(
        execute_render(&opts).unwrap(),
        "WOQLQuery().triple(\"a\", \"p\", \"o\")"
    );
}

#[test]
fn test_vocab_file_contents_are_applied() {
    let input = r#"{
        "@type": "woql:Triple",
        "woql:subject": "doc:a",
        "woql:predicate": "rdf:type",
        "woql:object": "o"
    }"#;
    let mut opts = options(input);
    opts.vocab = Some(r#"{"type": "rdf:type"}"#.to_string());
    assert_eq!(
        execute_render(&opts).unwrap(),
        "WOQL.triple(\"a\", \"type\", \"o\")"
    );
}

#[test]
fn test_invalid_json_reports_json_error() {
    assert!(matches!(
        execute_render(&options("{not json")),
        Err(CliError::Json(_))
    ));
}

#[test]
fn test_malformed_tree_reports_node_error() {
    assert!(matches!(
        execute_render(&options(r#"{"woql:subject": "doc:a"}"#)),
        Err(CliError::Node(_))
    ));
}
