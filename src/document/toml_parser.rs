use super::{DocumentParser, Node};
use crate::error::Error;

/// Parses TOML with the `toml` crate. Tables keep their document order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlParser;

impl DocumentParser for TomlParser {
    fn parse(&self, text: &str) -> Result<Node, Error> {
        let table: toml::Table = toml::from_str(text).map_err(|e| {
            let location = e
                .span()
                .map(|span| format!(" at line {}", line_of(text, span.start)))
                .unwrap_or_default();
            Error::StructuralParse(format!("{}{}", e.message().trim(), location))
        })?;
        Ok(table_to_node(table))
    }
}

fn line_of(text: &str, offset: usize) -> usize {
    text.get(..offset)
        .map_or(0, |before| before.matches('\n').count())
        + 1
}

fn table_to_node(table: toml::Table) -> Node {
    Node::Mapping(
        table
            .into_iter()
            .map(|(key, value)| (key, toml_to_node(value)))
            .collect(),
    )
}

/// Convert toml::Value to a document node
fn toml_to_node(v: toml::Value) -> Node {
    match v {
        toml::Value::String(s) => Node::string(s),
        toml::Value::Integer(i) => Node::integer(i),
        toml::Value::Float(f) => Node::float(f),
        toml::Value::Boolean(b) => Node::boolean(b),
        toml::Value::Datetime(dt) => Node::Unsupported(dt.to_string()),
        toml::Value::Array(arr) => Node::Sequence(arr.into_iter().map(toml_to_node).collect()),
        toml::Value::Table(table) => table_to_node(table),
    }
}
