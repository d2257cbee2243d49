//! Text passes run before the document reaches the structural parser.
//!
//! 1. [`strip_comments`] removes `{- ... -}` block comments.
//! 2. [`extract_constants`] pulls `let name = value` declarations out of the
//!    text and evaluates them, in order, into a [`Constants`] table.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    error::Error,
    evaluator::{evaluate_constant_expression, is_constant_expression},
    identifier::check_identifier,
    value::{Constants, Value},
};

static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{-.*?-\}").expect("comment pattern is valid"));

static LET_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^let\s+([^\s=]+)\s*=\s*(.+)$").expect("declaration pattern is valid")
});

static INTEGER_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("integer pattern is valid"));

// A signed whole number has no integer path and lands here
static FLOAT_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("float pattern is valid"));

/// Removes every `{- ... -}` block, newlines included. Blocks do not nest:
/// the first `-}` closes the block.
///
/// # Examples
///
/// ```
/// use letcfg::preprocess::strip_comments;
///
/// assert_eq!(strip_comments("a {- note\nmore -}b"), "a b");
/// assert_eq!(strip_comments("no comments"), "no comments");
/// ```
pub fn strip_comments(text: &str) -> String {
    for block in BLOCK_COMMENT.find_iter(text) {
        log::trace!("stripping comment at {}..{}", block.start(), block.end());
    }
    BLOCK_COMMENT.replace_all(text, "").into_owned()
}

/// Removes `let` declarations from the text and returns the remaining text
/// together with the declared constants.
///
/// Declarations are evaluated top to bottom; each one sees only the
/// constants declared above it.
///
/// # Examples
///
/// ```
/// use letcfg::preprocess::extract_constants;
/// use letcfg::Value;
///
/// let (rest, constants) = extract_constants("let x = 10\nlet y = \"|x + 5|\"\nport = 1").unwrap();
/// assert_eq!(rest, "port = 1");
/// assert_eq!(constants.get("x"), Some(&Value::Integer(10)));
/// assert_eq!(constants.get("y"), Some(&Value::String("|x + 5|".into())));
/// ```
pub fn extract_constants(text: &str) -> Result<(String, Constants), Error> {
    let mut constants = Constants::new();
    let normalized = text.replace("\r\n", "\n");
    let mut kept = Vec::new();

    for line in normalized.split('\n') {
        let Some(captures) = LET_DECLARATION.captures(line.trim()) else {
            kept.push(line);
            continue;
        };

        let name = check_identifier(&captures[1])?;
        let raw = captures[2].trim();
        let value = if is_constant_expression(raw) {
            evaluate_constant_expression(raw, &constants)?
        } else {
            parse_literal(raw)?
        };

        log::debug!("constant {} = {:?}", name, value);
        if let Some(previous) = constants.define(name, value) {
            log::debug!("constant {} shadows earlier value {:?}", name, previous);
        }
    }

    Ok((kept.join("\n"), constants))
}

/// Parses the right-hand side of a declaration: an unsigned integer, a
/// decimal float, or a double-quoted string (stored without its quotes).
/// Signed numbers are always floats, so `-5` is stored as `-5.0`.
pub fn parse_literal(text: &str) -> Result<Value, Error> {
    let text = text.trim();
    let parse_error = || Error::ValueParse(text.to_string());

    if INTEGER_LITERAL.is_match(text) {
        text.parse().map(Value::Integer).map_err(|_| parse_error())
    } else if FLOAT_LITERAL.is_match(text) {
        text.parse().map(Value::Float).map_err(|_| parse_error())
    } else if let Some(inner) = text
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Ok(Value::String(inner.to_string()))
    } else {
        Err(parse_error())
    }
}

#[test]
fn test_strip_comments_spanning_lines() {
    let text = "{-\nfirst\nsecond\n-}\n[data]\nvalue = 42\n";
    assert_eq!(strip_comments(text), "\n[data]\nvalue = 42\n");
}

#[test]
fn test_strip_comments_not_nested() {
    assert_eq!(strip_comments("a {- x {- y -} z -} b"), "a  z -} b");
}

#[test]
fn test_unterminated_comment_is_kept() {
    assert_eq!(strip_comments("a {- never closed"), "a {- never closed");
}

#[test]
fn test_crlf_is_normalized() {
    let (rest, constants) = extract_constants("let a = 1\r\nkey = 2\r\n").unwrap();
    assert_eq!(rest, "key = 2\n");
    assert_eq!(constants.len(), 1);
}
