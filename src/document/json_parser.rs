use super::{DocumentParser, Node};
use crate::error::Error;

/// Parses JSON with `serde_json`. Objects keep their document order.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl DocumentParser for JsonParser {
    fn parse(&self, text: &str) -> Result<Node, Error> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| Error::StructuralParse(e.to_string()))?;
        Ok(json_to_node(value))
    }
}

/// Convert serde_json::Value to a document node
fn json_to_node(v: serde_json::Value) -> Node {
    match v {
        serde_json::Value::Null => Node::Unsupported("null".to_string()),
        serde_json::Value::Bool(b) => Node::boolean(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Node::integer(i),
            None => match n.as_f64() {
                Some(f) => Node::float(f),
                None => Node::Unsupported(n.to_string()),
            },
        },
        serde_json::Value::String(s) => Node::string(s),
        serde_json::Value::Array(arr) => Node::Sequence(arr.into_iter().map(json_to_node).collect()),
        serde_json::Value::Object(obj) => {
            Node::Mapping(obj.into_iter().map(|(k, v)| (k, json_to_node(v))).collect())
        }
    }
}
