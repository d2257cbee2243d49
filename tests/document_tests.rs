// tests/document_tests.rs

use letcfg::{
    Error,
    document::{DocumentParser, InputFormat, JsonParser, Node, TomlParser},
};

// ============================================================================
// TOML
// ============================================================================

#[test]
fn test_toml_tables_become_mappings() {
    let doc = TomlParser.parse("[server]\nhost = \"localhost\"\nport = 8080\n").unwrap();
    assert_eq!(
        doc,
        Node::mapping([(
            "server",
            Node::mapping([("host", Node::string("localhost")), ("port", Node::integer(8080))]),
        )])
    );
}

#[test]
fn test_toml_keeps_document_order() {
    let doc = TomlParser.parse("sum = 1\ndifference = 2\nmax_value = 3\n").unwrap();
    let Node::Mapping(entries) = doc else {
        panic!("expected mapping");
    };
    let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["sum", "difference", "max_value"]);
}

#[test]
fn test_toml_scalars_and_arrays() {
    let doc = TomlParser
        .parse("f = 2.75\nb = true\nitems = [1, 2]\ninline = { name = \"a\" }\n")
        .unwrap();
    assert_eq!(
        doc,
        Node::mapping([
            ("f", Node::float(2.75)),
            ("b", Node::boolean(true)),
            ("items", Node::Sequence(vec![Node::integer(1), Node::integer(2)])),
            ("inline", Node::mapping([("name", Node::string("a"))])),
        ])
    );
}

#[test]
fn test_toml_datetime_is_unsupported() {
    let doc = TomlParser.parse("when = 1979-05-27\n").unwrap();
    assert_eq!(doc, Node::mapping([("when", Node::Unsupported("1979-05-27".to_string()))]));
}

#[test]
fn test_toml_syntax_error() {
    let err = TomlParser.parse("a = 1\nb = = 2\n").unwrap_err();
    assert!(matches!(err, Error::StructuralParse(_)));
}

#[test]
fn test_toml_duplicate_key_error() {
    let err = TomlParser.parse("a = 1\na = 2\n").unwrap_err();
    assert!(matches!(err, Error::StructuralParse(_)));
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_json_objects_become_mappings() {
    let doc = JsonParser
        .parse(r#"{"server": {"host": "localhost", "port": 8080, "ratio": 0.5}}"#)
        .unwrap();
    assert_eq!(
        doc,
        Node::mapping([(
            "server",
            Node::mapping([
                ("host", Node::string("localhost")),
                ("port", Node::integer(8080)),
                ("ratio", Node::float(0.5)),
            ]),
        )])
    );
}

#[test]
fn test_json_keeps_document_order() {
    let doc = JsonParser.parse(r#"{"b": 1, "a": 2}"#).unwrap();
    assert_eq!(doc, Node::mapping([("b", Node::integer(1)), ("a", Node::integer(2))]));
}

#[test]
fn test_json_null_is_unsupported() {
    let doc = JsonParser.parse(r#"{"x": null}"#).unwrap();
    assert_eq!(doc, Node::mapping([("x", Node::Unsupported("null".to_string()))]));
}

#[test]
fn test_json_syntax_error() {
    assert!(matches!(JsonParser.parse("{"), Err(Error::StructuralParse(_))));
}

// ============================================================================
// Formats
// ============================================================================

#[test]
fn test_input_format_names() {
    assert_eq!(InputFormat::from_name("toml"), Some(InputFormat::Toml));
    assert_eq!(InputFormat::from_name("JSON"), Some(InputFormat::Json));
    assert_eq!(InputFormat::from_name("yaml"), None);
    assert_eq!(InputFormat::default(), InputFormat::Toml);
}

#[test]
fn test_input_format_parser() {
    let doc = InputFormat::Json.parser().parse(r#"{"a": 1}"#).unwrap();
    assert_eq!(doc, Node::mapping([("a", Node::integer(1))]));
}

#[test]
fn test_node_display() {
    let node = Node::mapping([
        ("a", Node::Sequence(vec![Node::integer(1), Node::string("x")])),
        ("b", Node::float(1.0)),
    ]);
    assert_eq!(node.to_string(), "{a = [1, \"x\"], b = 1.0}");
}
