use crate::{
    ast::{BinOp, Expr, Token},
    lexer::{LexError, Lexer},
};
use std::{fmt, mem};

/// The callable name accepted in call position.
pub const MAX_FUNCTION: &str = "max";

/// Deepest expression tree accepted. Parentheses and `max` calls count
/// towards it, as does every operator of a `+`/`-` chain.
pub const MAX_DEPTH: usize = 256;

/// Errors produced while parsing a constant expression.
///
/// Every construct outside the grammar ends up here, so the evaluator only
/// ever sees trees it knows how to evaluate.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The source could not be tokenized
    Lex(LexError),

    /// An operator other than binary `+` and `-`
    UnsupportedOperator(String),

    /// A call to anything but `max`
    UnsupportedFunction(String),

    /// A literal that is not a number
    UnsupportedLiteral(String),

    /// `max()` without arguments
    MissingArguments(String),

    /// Any other token in the wrong place
    UnexpectedToken { expected: String, found: Token },

    /// Nesting beyond [`MAX_DEPTH`]
    TooDeep,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(e) => write!(f, "{}", e),
            ParseError::UnsupportedOperator(op) => write!(f, "operator '{}' is not allowed", op),
            ParseError::UnsupportedFunction(name) => {
                write!(f, "function '{}' is not allowed (only '{}' is)", name, MAX_FUNCTION)
            }
            ParseError::UnsupportedLiteral(lit) => write!(f, "literal {} is not numeric", lit),
            ParseError::MissingArguments(name) => {
                write!(f, "'{}' needs at least one argument", name)
            }
            ParseError::UnexpectedToken { expected, found } => {
                write!(f, "expected {}, found {}", expected, describe(found))
            }
            ParseError::TooDeep => {
                write!(f, "expression nests deeper than {} levels", MAX_DEPTH)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::Lex(e)
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Eof => token.to_string(),
        _ => format!("'{}'", token),
    }
}

pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    nesting: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
            nesting: 0,
        })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if !self.check(&expected) {
            return Err(ParseError::UnexpectedToken {
                expected: describe(&expected),
                found: self.current_token.clone(),
            });
        }
        self.advance()
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current_token) == mem::discriminant(token)
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.nesting += 1;
        if self.nesting > MAX_DEPTH {
            return Err(ParseError::TooDeep);
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.nesting -= 1;
    }

    /// Parse primary expressions (atoms): numbers, names, calls, '(' expr ')'.
    /// Returns the expression together with the depth of its tree.
    fn parse_primary(&mut self) -> Result<(Expr, usize), ParseError> {
        match mem::replace(&mut self.current_token, Token::Eof) {
            Token::Integer(n) => {
                self.advance()?;
                Ok((Expr::Integer(n), 1))
            }
            Token::Float(n) => {
                self.advance()?;
                Ok((Expr::Float(n), 1))
            }
            Token::Identifier(name) => {
                self.advance()?;
                if self.check(&Token::LParen) {
                    self.enter()?;
                    let call = self.parse_call(name)?;
                    self.leave();
                    Ok(call)
                } else {
                    Ok((Expr::Name(name), 1))
                }
            }
            Token::LParen => {
                self.enter()?;
                self.advance()?;
                let inner = self.parse_additive()?;
                self.expect(Token::RParen)?;
                self.leave();
                Ok(inner)
            }
            Token::String(s) => Err(ParseError::UnsupportedLiteral(format!("\"{}\"", s))),
            // No unary operators: `-5` has to be written as `0 - 5`
            token @ (Token::Minus | Token::Plus) => {
                Err(ParseError::UnsupportedOperator(format!("unary {}", token)))
            }
            token => Err(ParseError::UnexpectedToken {
                expected: "a number, a name or '('".to_string(),
                found: token,
            }),
        }
    }

    fn parse_call(&mut self, name: String) -> Result<(Expr, usize), ParseError> {
        if name != MAX_FUNCTION {
            return Err(ParseError::UnsupportedFunction(name));
        }
        self.advance()?; // Consume '('

        if self.check(&Token::RParen) {
            return Err(ParseError::MissingArguments(name));
        }

        let mut args = vec![];
        let mut deepest = 0;
        loop {
            let (arg, depth) = self.parse_additive()?;
            args.push(arg);
            deepest = deepest.max(depth);

            if !self.check(&Token::Comma) {
                break;
            }
            self.advance()?;
            // Trailing comma
            if self.check(&Token::RParen) {
                break;
            }
        }

        self.expect(Token::RParen)?;
        Ok((Expr::Max(args), node_depth(deepest)?))
    }

    fn parse_additive(&mut self) -> Result<(Expr, usize), ParseError> {
        let (mut left, mut left_depth) = self.parse_primary()?;

        loop {
            let op = match &self.current_token {
                Token::Plus => BinOp::Add,
                Token::Minus => BinOp::Subtract,
                token @ (Token::Star | Token::Slash | Token::Percent) => {
                    return Err(ParseError::UnsupportedOperator(token.to_string()));
                }
                _ => break,
            };

            self.advance()?;
            let (right, right_depth) = self.parse_primary()?;

            left_depth = node_depth(left_depth.max(right_depth))?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok((left, left_depth))
    }

    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_additive().map(|(expr, _)| expr)
    }

    /// Parse a complete expression; the whole input must be consumed.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression()?;
        self.expect(Token::Eof)?;
        Ok(expr)
    }
}

/// Depth of a node whose deepest child has depth `child`.
fn node_depth(child: usize) -> Result<usize, ParseError> {
    let depth = child + 1;
    if depth > MAX_DEPTH {
        return Err(ParseError::TooDeep);
    }
    Ok(depth)
}
