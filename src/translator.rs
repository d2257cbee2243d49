use crate::{
    document::{DocumentParser, TomlParser},
    error::Error,
    output::to_lines,
    preprocess::{extract_constants, strip_comments},
    value::Constants,
};

/// Result of a successful translation.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    /// Output lines, without line terminators
    pub lines: Vec<String>,
    /// Constants declared by the input, after all declarations ran
    pub constants: Constants,
}

/// Runs the whole pipeline with an explicit structural parser:
/// strip comments, extract constants, parse, serialize.
pub fn translate_with(input: &str, parser: &dyn DocumentParser) -> Result<Translation, Error> {
    let text = strip_comments(input);
    let (text, constants) = extract_constants(&text)?;
    log::debug!("{} constant(s) declared", constants.len());

    let document = parser.parse(&text)?;
    let lines = to_lines(&document, &constants)?;

    Ok(Translation { lines, constants })
}

/// Translates a TOML document into output lines.
///
/// # Examples
///
/// ```
/// let input = "let x = 10\nlet y = 20\n\n[values]\na = \"|x + y|\"\n";
/// let lines = letcfg::translate(input).unwrap();
/// assert_eq!(lines, vec!["[", "  values:", "    a => 30,", "]"]);
/// ```
pub fn translate(input: &str) -> Result<Vec<String>, Error> {
    translate_with(input, &TomlParser).map(|t| t.lines)
}
