//! Serialization of a document tree into the bracketed output format.
//!
//! # Format
//!
//! - The top-level mapping is wrapped in `[` / `]`.
//! - A scalar entry is `key => value,`.
//! - A nested mapping is a `key:` header followed by its entries one level
//!   deeper. It gets no brackets of its own.
//! - A list is `key => [`, one `value,` per element, then `],`. Mappings
//!   inside a list are wrapped in `[` / `],`.
//! - Two spaces of indentation per level.
//!
//! Strings are quoted verbatim. String values written as `|expression|` are
//! evaluated against the constants table and emitted as numbers.
//!
//! # Examples
//!
//! ```
//! use letcfg::document::Node;
//! use letcfg::output::Printer;
//! use letcfg::Constants;
//!
//! let doc = Node::mapping([(
//!     "server",
//!     Node::mapping([("host", Node::string("localhost")), ("port", Node::integer(8080))]),
//! )]);
//!
//! let constants = Constants::new();
//! let lines = Printer::new(&constants).print(&doc).unwrap();
//! assert_eq!(
//!     lines,
//!     vec!["[", "  server:", "    host => \"localhost\",", "    port => 8080,", "]"]
//! );
//! ```

use crate::{
    document::{Node, Scalar},
    error::Error,
    evaluator::{evaluate_constant_expression, is_constant_expression},
    identifier::check_identifier,
    value::{Constants, Value, format_float},
};

pub struct Printer<'a> {
    constants: &'a Constants,
}

impl<'a> Printer<'a> {
    pub fn new(constants: &'a Constants) -> Self {
        Printer { constants }
    }

    /// Serializes a whole document. The root must be a mapping.
    ///
    /// Lines are buffered: on error nothing is returned.
    pub fn print(&self, document: &Node) -> Result<Vec<String>, Error> {
        let Node::Mapping(entries) = document else {
            return Err(Error::StructuralParse(format!(
                "document root must be a mapping, got {}",
                document
            )));
        };

        let mut lines = Vec::new();
        self.print_mapping(entries, 0, &mut lines)?;
        Ok(lines)
    }

    fn print_mapping(
        &self,
        entries: &[(String, Node)],
        depth: usize,
        out: &mut Vec<String>,
    ) -> Result<(), Error> {
        let indent = self.indent(depth);

        // Only the root mapping is bracketed here; list items bracket themselves
        if depth == 0 {
            out.push(format!("{}[", indent));
        }

        for (key, value) in entries {
            let key = check_identifier(key.trim())?;
            self.print_entry(key, value, depth, out)?;
        }

        if depth == 0 {
            out.push(format!("{}]", indent));
        }
        Ok(())
    }

    fn print_entry(
        &self,
        key: &str,
        value: &Node,
        depth: usize,
        out: &mut Vec<String>,
    ) -> Result<(), Error> {
        let inner = self.indent(depth + 1);

        match value {
            Node::Mapping(entries) => {
                out.push(format!("{}{}:", inner, key));
                self.print_mapping(entries, depth + 1, out)
            }
            Node::Sequence(items) => {
                out.push(format!("{}{} => [", inner, key));
                self.print_sequence(items, depth + 2, out)?;
                out.push(format!("{}],", inner));
                Ok(())
            }
            Node::Scalar(Scalar::String(s)) if is_constant_expression(s) => {
                let value = evaluate_constant_expression(s, self.constants)?;
                out.push(format!("{}{} => {},", inner, key, self.format_value(&value)));
                Ok(())
            }
            Node::Scalar(scalar) => {
                out.push(format!("{}{} => {},", inner, key, self.format_scalar(scalar)?));
                Ok(())
            }
            Node::Unsupported(text) => Err(Error::UnsupportedValueType(text.clone())),
        }
    }

    fn print_sequence(
        &self,
        items: &[Node],
        depth: usize,
        out: &mut Vec<String>,
    ) -> Result<(), Error> {
        let indent = self.indent(depth);

        for item in items {
            match item {
                Node::Scalar(scalar) => {
                    out.push(format!("{}{},", indent, self.format_scalar(scalar)?));
                }
                Node::Mapping(entries) => {
                    out.push(format!("{}[", indent));
                    self.print_mapping(entries, depth, out)?;
                    out.push(format!("{}],", indent));
                }
                Node::Sequence(_) | Node::Unsupported(_) => {
                    return Err(Error::UnsupportedListItemType(item.to_string()));
                }
            }
        }
        Ok(())
    }

    fn format_scalar(&self, scalar: &Scalar) -> Result<String, Error> {
        match scalar {
            Scalar::Boolean(b) => Err(Error::UnsupportedValueType(b.to_string())),
            Scalar::String(s) => Ok(format!("\"{}\"", s)),
            Scalar::Integer(n) => Ok(n.to_string()),
            Scalar::Float(n) => Ok(format_float(*n)),
        }
    }

    fn format_value(&self, value: &Value) -> String {
        match value {
            Value::String(s) => format!("\"{}\"", s),
            number => number.to_string(),
        }
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }
}

/// Serializes a document into output lines.
pub fn to_lines(document: &Node, constants: &Constants) -> Result<Vec<String>, Error> {
    Printer::new(constants).print(document)
}
