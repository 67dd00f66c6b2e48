use woql_unparse::Operator;

#[test]
fn test_known_tags_round_trip() {
    for tag in [
        "And",
        "Or",
        "When",
        "QueryListElement",
        "ValueList",
        "Array",
        "AsVar",
        "NamedAsVar",
        "IndexedAsVar",
        "AsVars",
        "NamedAsVars",
        "IndexedAsVars",
        "IDGenerator",
        "IsA",
        "PostResource",
        "FileResource",
        "RemoteResource",
        "True",
        "False",
    ] {
        assert_eq!(Operator::from_tag(tag).tag(), tag);
    }
}

#[test]
fn test_override_table() {
    assert_eq!(Operator::from_tag("IDGenerator").function_name(), "idgen");
    assert_eq!(Operator::from_tag("IsA").function_name(), "isa");
    assert_eq!(Operator::from_tag("PostResource").function_name(), "post");
    assert_eq!(Operator::from_tag("FileResource").function_name(), "file");
    assert_eq!(Operator::from_tag("RemoteResource").function_name(), "remote");
    assert_eq!(Operator::from_tag("AsVars").function_name(), "as");
    assert_eq!(Operator::from_tag("NamedAsVars").function_name(), "as");
    assert_eq!(Operator::from_tag("IndexedAsVars").function_name(), "as");
}

#[test]
fn test_shortcut_table() {
    assert_eq!(Operator::from_tag("Optional").function_name(), "opt");
    assert_eq!(Operator::from_tag("Substring").function_name(), "substr");
    assert_eq!(Operator::from_tag("Regexp").function_name(), "re");
    assert_eq!(Operator::from_tag("Subsumption").function_name(), "sub");
    assert_eq!(Operator::from_tag("Equals").function_name(), "eq");
    assert_eq!(Operator::from_tag("Concatenate").function_name(), "concat");
}

#[test]
fn test_derived_names_for_unknown_operators() {
    assert_eq!(Operator::from_tag("Frobnicate").function_name(), "frobnicate");
    assert_eq!(Operator::from_tag("ReadObject").function_name(), "read_object");
    assert_eq!(
        Operator::from_tag("DeleteTriple").function_name(),
        "delete_triple"
    );
}

#[test]
fn test_boolean_constants_derive_bare_keywords() {
    assert_eq!(Operator::from_tag("True").function_name(), "true");
    assert_eq!(Operator::from_tag("False").function_name(), "false");
}

#[test]
fn test_list_classification() {
    for tag in ["ValueList", "Array", "NamedAsVar", "IndexedAsVar", "AsVar"] {
        assert!(Operator::from_tag(tag).is_list(), "{} should be a list", tag);
    }
    assert!(!Operator::from_tag("And").is_list());
    assert!(!Operator::from_tag("Triple").is_list());
}

#[test]
fn test_query_list_classification() {
    assert!(Operator::from_tag("And").takes_newline());
    assert!(Operator::from_tag("Or").takes_newline());
    assert!(!Operator::from_tag("When").takes_newline());
    assert!(!Operator::from_tag("Triple").takes_newline());
}

#[test]
fn test_boxed_predicate_priority_order() {
    let op = Operator::from_tag("DataValue");
    assert_eq!(
        op.boxed_predicate(|k| k == "woql:node" || k == "woql:value"),
        Some("woql:value")
    );
    assert_eq!(op.boxed_predicate(|k| k == "woql:node"), Some("woql:node"));
    assert_eq!(
        op.boxed_predicate(|k| k == "woql:arithmetic_value"),
        Some("woql:arithmetic_value")
    );
    assert_eq!(op.boxed_predicate(|_| false), None);
}

#[test]
fn test_query_list_element_boxes_its_query() {
    let op = Operator::from_tag("QueryListElement");
    assert_eq!(op.boxed_predicate(|_| false), Some("woql:query"));
    // The generic boxed predicates still win if present.
    assert_eq!(
        op.boxed_predicate(|k| k == "woql:variable"),
        Some("woql:variable")
    );
}
