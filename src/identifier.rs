use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z_]+$").expect("identifier pattern is valid"));

/// Mapping keys and constant names: lowercase ASCII letters and underscores,
/// at least one character.
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Returns the name unchanged, or `InvalidIdentifier` naming it.
pub fn check_identifier(name: &str) -> Result<&str, Error> {
    if is_identifier(name) {
        Ok(name)
    } else {
        Err(Error::InvalidIdentifier(name.to_string()))
    }
}

#[test]
fn test_identifier_pattern() {
    assert!(is_identifier("port"));
    assert!(is_identifier("max_value"));
    assert!(is_identifier("_"));
    assert!(!is_identifier(""));
    assert!(!is_identifier("123invalid"));
    assert!(!is_identifier("Port"));
    assert!(!is_identifier("port2"));
    assert!(!is_identifier("my-key"));
}
