//! The document tree handed from the structural parser to the printer.
//!
//! Parsing itself is not done here: a [`DocumentParser`] turns preprocessed
//! text into a [`Node`]. TOML is the default input syntax; JSON is accepted
//! as well.

mod json_parser;
mod toml_parser;

use std::fmt;

use crate::error::Error;

pub use json_parser::JsonParser;
pub use toml_parser::TomlParser;

/// A node of the parsed document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Keys in document order
    Mapping(Vec<(String, Node)>),

    Sequence(Vec<Node>),

    Scalar(Scalar),

    /// A value the structural parser understands but the output format has
    /// no place for (TOML datetimes, JSON null), kept in its textual form.
    Unsupported(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl Node {
    pub fn string(s: impl Into<String>) -> Self {
        Node::Scalar(Scalar::String(s.into()))
    }

    pub fn integer(n: i64) -> Self {
        Node::Scalar(Scalar::Integer(n))
    }

    pub fn float(n: f64) -> Self {
        Node::Scalar(Scalar::Float(n))
    }

    pub fn boolean(b: bool) -> Self {
        Node::Scalar(Scalar::Boolean(b))
    }

    /// Builds a mapping from `(key, node)` pairs, keeping their order.
    pub fn mapping<K: Into<String>>(entries: impl IntoIterator<Item = (K, Node)>) -> Self {
        Node::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => write!(f, "\"{}\"", s),
            Scalar::Integer(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", crate::value::format_float(*n)),
            Scalar::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Compact one-line rendering, used to name values in error messages.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Mapping(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} = {}", key, value)?;
                }
                write!(f, "}}")
            }
            Node::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Node::Scalar(scalar) => write!(f, "{}", scalar),
            Node::Unsupported(text) => write!(f, "{}", text),
        }
    }
}

/// Structural parser seam: preprocessed text in, document tree out.
///
/// Failures come back as [`Error::StructuralParse`] carrying the parser's own
/// diagnostic.
pub trait DocumentParser {
    fn parse(&self, text: &str) -> Result<Node, Error>;
}

/// Input syntaxes with a built-in [`DocumentParser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Toml,
    Json,
}

impl InputFormat {
    /// Parse format name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn parser(self) -> Box<dyn DocumentParser> {
        match self {
            InputFormat::Toml => Box::new(TomlParser),
            InputFormat::Json => Box::new(JsonParser),
        }
    }
}
