use std::fmt;

use crate::{evaluator::EvalError, parser::ParseError};

/// Everything that can abort a translation.
///
/// Errors are raised where the offending name or value is consumed and are
/// never recovered from: the first one ends the run.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A mapping key or constant name outside `[a-z_]+`
    InvalidIdentifier(String),

    /// A value with no textual form in the output (booleans, datetimes, null).
    ///
    /// Carries the value as it reads in the document, so booleans appear in
    /// lowercase: `Unsupported value type 'true'.`
    UnsupportedValueType(String),

    /// A list element that is neither a scalar nor a mapping
    UnsupportedListItemType(String),

    /// A constant expression using something outside the expression grammar
    InvalidExpression(String),

    /// A constant expression referring to a name not declared before it
    UnknownVariable(String),

    /// The right-hand side of a `let` that is not an integer, float or string
    ValueParse(String),

    /// The structural parser rejected the preprocessed document
    StructuralParse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidIdentifier(name) => write!(f, "Invalid identifier '{}'", name),
            Error::UnsupportedValueType(value) => {
                write!(f, "Unsupported value type '{}'.", value)
            }
            Error::UnsupportedListItemType(item) => {
                write!(f, "Unsupported list item type '{}'.", item)
            }
            Error::InvalidExpression(msg) => write!(f, "Invalid expression: {}", msg),
            Error::UnknownVariable(name) => write!(f, "Unknown variable '{}'", name),
            Error::ValueParse(text) => write!(f, "Could not parse value '{}'", text),
            Error::StructuralParse(msg) => write!(f, "Structural parse failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::InvalidExpression(e.to_string())
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        match e {
            EvalError::UnknownVariable(name) => Error::UnknownVariable(name),
            other => Error::InvalidExpression(other.to_string()),
        }
    }
}
