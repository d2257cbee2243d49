use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Integer
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 8080
    /// ```
    Integer(i64),

    /// Floating-point number
    ///
    /// # Examples
    /// ```text
    /// 3.14
    /// 0.5
    /// ```
    Float(f64),

    /// String literal in single or double quotes.
    ///
    /// Lexed only so the parser can name it when rejecting it.
    String(String),

    // Identifiers
    /// Constant name or function name
    ///
    /// Starts with a letter or underscore, followed by letters, digits, or underscores.
    Identifier(String),

    // Arithmetic
    /// Addition
    Plus,

    /// Subtraction
    Minus,

    /// Multiplication (not supported by the grammar)
    Star,

    /// Division (not supported by the grammar)
    Slash,

    /// Modulo (not supported by the grammar)
    Percent,

    // Delimiters
    /// Left parenthesis for grouping or function calls
    LParen,

    /// Right parenthesis
    RParen,

    /// Left bracket (not supported by the grammar)
    LBracket,

    /// Right bracket
    RBracket,

    /// Comma for separating arguments
    Comma,

    /// End of input
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Integer(n) => write!(f, "{}", n),
            Token::Float(n) => write!(f, "{}", n),
            Token::String(s) => write!(f, "\"{}\"", s),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Percent => write!(f, "%"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Comma => write!(f, ","),
            Token::Eof => write!(f, "end of expression"),
        }
    }
}
