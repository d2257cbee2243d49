// tests/output_tests.rs

use letcfg::{
    Constants, Error, Value,
    document::Node,
    output::{Printer, to_lines},
};

fn print(doc: &Node) -> Result<Vec<String>, Error> {
    to_lines(doc, &Constants::new())
}

fn lines(expected: &[&str]) -> Vec<String> {
    expected.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Mappings
// ============================================================================

#[test]
fn test_flat_mapping() {
    let doc = Node::mapping([
        ("name", Node::string("app")),
        ("port", Node::integer(8080)),
        ("ratio", Node::float(0.5)),
    ]);
    assert_eq!(
        print(&doc).unwrap(),
        lines(&["[", "  name => \"app\",", "  port => 8080,", "  ratio => 0.5,", "]"])
    );
}

#[test]
fn test_empty_document() {
    assert_eq!(print(&Node::mapping(Vec::<(&str, Node)>::new())).unwrap(), lines(&["[", "]"]));
}

#[test]
fn test_nested_mapping_is_not_bracketed() {
    let doc = Node::mapping([(
        "server",
        Node::mapping([("host", Node::string("localhost")), ("port", Node::integer(8080))]),
    )]);
    assert_eq!(
        print(&doc).unwrap(),
        lines(&["[", "  server:", "    host => \"localhost\",", "    port => 8080,", "]"])
    );
}

#[test]
fn test_deeply_nested_mappings() {
    let doc = Node::mapping([(
        "parent",
        Node::mapping([("child", Node::mapping([("name", Node::string("child_name"))]))]),
    )]);
    assert_eq!(
        print(&doc).unwrap(),
        lines(&["[", "  parent:", "    child:", "      name => \"child_name\",", "]"])
    );
}

#[test]
fn test_keys_keep_document_order() {
    let doc = Node::mapping([
        ("zeta", Node::integer(1)),
        ("alpha", Node::integer(2)),
        ("mid", Node::integer(3)),
    ]);
    assert_eq!(
        print(&doc).unwrap(),
        lines(&["[", "  zeta => 1,", "  alpha => 2,", "  mid => 3,", "]"])
    );
}

// ============================================================================
// Sequences
// ============================================================================

#[test]
fn test_list_of_scalars() {
    let doc = Node::mapping([(
        "items",
        Node::Sequence(vec![Node::integer(1), Node::integer(2), Node::integer(3)]),
    )]);
    assert_eq!(
        print(&doc).unwrap(),
        lines(&["[", "  items => [", "    1,", "    2,", "    3,", "  ],", "]"])
    );
}

#[test]
fn test_empty_list() {
    let doc = Node::mapping([("items", Node::Sequence(vec![]))]);
    assert_eq!(print(&doc).unwrap(), lines(&["[", "  items => [", "  ],", "]"]));
}

#[test]
fn test_list_of_mappings_is_bracketed() {
    let doc = Node::mapping([(
        "data",
        Node::mapping([(
            "items",
            Node::Sequence(vec![
                Node::mapping([("name", Node::string("item1")), ("value", Node::integer(10))]),
                Node::mapping([("name", Node::string("item2")), ("value", Node::integer(20))]),
            ]),
        )]),
    )]);
    assert_eq!(
        print(&doc).unwrap(),
        lines(&[
            "[",
            "  data:",
            "    items => [",
            "      [",
            "        name => \"item1\",",
            "        value => 10,",
            "      ],",
            "      [",
            "        name => \"item2\",",
            "        value => 20,",
            "      ],",
            "    ],",
            "]",
        ])
    );
}

#[test]
fn test_mapping_inside_list_item_is_not_bracketed() {
    let doc = Node::mapping([(
        "hosts",
        Node::Sequence(vec![Node::mapping([
            ("addr", Node::mapping([("ip", Node::string("10.0.0.1"))])),
            ("tags", Node::Sequence(vec![Node::string("a")])),
        ])]),
    )]);
    assert_eq!(
        print(&doc).unwrap(),
        lines(&[
            "[",
            "  hosts => [",
            "    [",
            "      addr:",
            "        ip => \"10.0.0.1\",",
            "      tags => [",
            "        \"a\",",
            "      ],",
            "    ],",
            "  ],",
            "]",
        ])
    );
}

#[test]
fn test_nested_list_rejected() {
    let doc = Node::mapping([(
        "matrix",
        Node::Sequence(vec![Node::Sequence(vec![Node::integer(1), Node::integer(2)])]),
    )]);
    let err = print(&doc).unwrap_err();
    assert_eq!(err, Error::UnsupportedListItemType("[1, 2]".to_string()));
}

#[test]
fn test_list_strings_are_not_evaluated() {
    let doc = Node::mapping([("items", Node::Sequence(vec![Node::string("|x|")]))]);
    assert_eq!(
        print(&doc).unwrap(),
        lines(&["[", "  items => [", "    \"|x|\",", "  ],", "]"])
    );
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn test_float_formatting() {
    let doc = Node::mapping([("ratio", Node::float(2.75)), ("whole", Node::float(2.0))]);
    assert_eq!(
        print(&doc).unwrap(),
        lines(&["[", "  ratio => 2.75,", "  whole => 2.0,", "]"])
    );
}

#[test]
fn test_string_quotes_not_escaped() {
    let doc = Node::mapping([("quote", Node::string("say \"hi\""))]);
    assert_eq!(print(&doc).unwrap()[1], "  quote => \"say \"hi\"\",");
}

#[test]
fn test_boolean_rejected() {
    let doc = Node::mapping([("data", Node::mapping([("value", Node::boolean(true))]))]);
    let err = print(&doc).unwrap_err();
    assert_eq!(err, Error::UnsupportedValueType("true".to_string()));
    assert_eq!(err.to_string(), "Unsupported value type 'true'.");
}

#[test]
fn test_boolean_in_list_rejected() {
    let doc = Node::mapping([("flags", Node::Sequence(vec![Node::boolean(false)]))]);
    assert_eq!(print(&doc).unwrap_err(), Error::UnsupportedValueType("false".to_string()));
}

#[test]
fn test_unsupported_value_rejected() {
    let doc = Node::mapping([("when", Node::Unsupported("1979-05-27".to_string()))]);
    assert_eq!(
        print(&doc).unwrap_err(),
        Error::UnsupportedValueType("1979-05-27".to_string())
    );

    let doc = Node::mapping([("when", Node::Sequence(vec![Node::Unsupported("null".to_string())]))]);
    assert_eq!(print(&doc).unwrap_err(), Error::UnsupportedListItemType("null".to_string()));
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_invalid_key() {
    let doc = Node::mapping([("data", Node::mapping([("123invalid", Node::string("test"))]))]);
    assert_eq!(print(&doc).unwrap_err(), Error::InvalidIdentifier("123invalid".to_string()));
}

#[test]
fn test_invalid_key_inside_list_item() {
    let doc = Node::mapping([(
        "items",
        Node::Sequence(vec![Node::mapping([("Name", Node::string("x"))])]),
    )]);
    assert_eq!(print(&doc).unwrap_err(), Error::InvalidIdentifier("Name".to_string()));
}

#[test]
fn test_keys_are_trimmed() {
    let doc = Node::mapping([(" padded ", Node::integer(1))]);
    assert_eq!(print(&doc).unwrap(), lines(&["[", "  padded => 1,", "]"]));
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn test_expression_values_evaluated() {
    let constants: Constants = [("x", Value::Integer(10)), ("y", Value::Integer(20))]
        .into_iter()
        .collect();
    let doc = Node::mapping([(
        "values",
        Node::mapping([("a", Node::string("|x + y|")), ("b", Node::string("|max(x, y)|"))]),
    )]);
    assert_eq!(
        Printer::new(&constants).print(&doc).unwrap(),
        lines(&["[", "  values:", "    a => 30,", "    b => 20,", "]"])
    );
}

#[test]
fn test_expression_error_propagates() {
    let doc = Node::mapping([("value", Node::string("|unknown + 1|"))]);
    assert_eq!(print(&doc).unwrap_err(), Error::UnknownVariable("unknown".to_string()));
}

#[test]
fn test_root_must_be_mapping() {
    let err = print(&Node::Sequence(vec![])).unwrap_err();
    assert!(matches!(err, Error::StructuralParse(_)));
}
