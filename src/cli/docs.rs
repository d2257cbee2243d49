//! Documentation content for the letcfg CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Comments,
    Constants,
    Expressions,
    Output,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "comments" | "comment" => Some(Self::Comments),
            "constants" | "constant" | "let" => Some(Self::Constants),
            "expressions" | "expression" | "expr" => Some(Self::Expressions),
            "output" | "format" => Some(Self::Output),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"LETCFG DOCUMENTATION

letcfg reads a TOML document extended with block comments, constant
declarations and inline expressions, and prints it in a bracketed
configuration format.

DOCUMENTATION CATEGORIES

  comments          {- ... -} block comments
  constants         let declarations
  expressions       |...| constant expressions
  output            Layout of the translated document

QUICK REFERENCE

  {- text -}        Block comment, may span lines
  let name = 10     Declare a constant (integer, float or "string")
  key = "|a + b|"   Value computed from constants
  max(a, b, ...)    Largest of its arguments

Run 'letcfg doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Comments) => Ok(COMMENTS_DOC),
        Some(DocCategory::Constants) => Ok(CONSTANTS_DOC),
        Some(DocCategory::Expressions) => Ok(EXPRESSIONS_DOC),
        Some(DocCategory::Output) => Ok(OUTPUT_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const COMMENTS_DOC: &str = r#"COMMENTS - Block Comments

  {- ... -}
    Everything from {- to the next -} is removed before the document is
    parsed, including line breaks. Comments do not nest.

    Example:
      {-
      Staging settings
      -}
      [server]
      port = 8080
"#;

const CONSTANTS_DOC: &str = r#"CONSTANTS - let Declarations

  let name = value
    Declares a constant. The line is removed from the document.
    Names use lowercase letters and underscores only.

  VALUES
    let port = 8080           Integer
    let ratio = 0.75          Float
    let offset = -5           Float (signed numbers are always floats)
    let host = "localhost"    String (quotes are not stored)
    let next = |port + 1|     Expression over earlier constants

  ORDER
    Declarations run top to bottom. A declaration can only use constants
    declared above it. Declaring a name again replaces its value.
"#;

const EXPRESSIONS_DOC: &str = r#"EXPRESSIONS - Constant Expressions

  "|expression|"
    A string value starting and ending with | is evaluated at translation
    time and replaced by its numeric result.

  ALLOWED
    10, 2.5           Numbers
    name              A declared constant
    a + b, a - b      Addition and subtraction
    max(a, b, ...)    Largest argument
    (a - b)           Grouping

  Anything else (other operators, other functions, strings) is rejected.
  Integers stay integers; any float operand makes the result a float.
  Expressions may nest at most 256 levels deep.

    Example:
      let x = 5
      let y = 15
      [calc]
      result = "|max(x + 10, y)|"     =>  result => 15,
"#;

const OUTPUT_DOC: &str = r#"OUTPUT - Translated Format

  [                       The document is wrapped in brackets
    key => "text",        Scalars
    section:              Nested tables: header, entries indented below
      port => 8080,
    items => [            Arrays
      1,
      [                   Tables inside arrays get brackets
        name => "a",
      ],
    ],
  ]

  Indentation is two spaces per level. Booleans and datetimes cannot be
  translated and stop the run with an error.
"#;
