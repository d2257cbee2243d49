use std::fmt;

use crate::{
    ast::{BinOp, Expr},
    error::Error,
    lexer::Lexer,
    parser::Parser,
    value::{Constants, Value},
};

/// Errors that can occur while evaluating a parsed expression.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Reference to a constant that has not been declared (yet)
    UnknownVariable(String),

    /// Reference to a string constant where a number is needed
    NonNumeric(String),

    /// Integer arithmetic that does not fit in 64 bits
    Overflow(String),

    /// `max` applied to nothing
    EmptyCall,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnknownVariable(name) => write!(f, "Unknown variable '{}'", name),
            EvalError::NonNumeric(name) => write!(f, "constant '{}' is not a number", name),
            EvalError::Overflow(expr) => write!(f, "integer overflow in {}", expr),
            EvalError::EmptyCall => write!(f, "'max' needs at least one argument"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Evaluates constant expressions against a constants table.
///
/// Evaluation only reads the table; an expression either produces one
/// number or fails.
pub struct Evaluator<'a> {
    constants: &'a Constants,
}

impl<'a> Evaluator<'a> {
    pub fn new(constants: &'a Constants) -> Self {
        Evaluator { constants }
    }

    /// Evaluates a parsed expression to a number.
    ///
    /// # Examples
    ///
    /// ```
    /// use letcfg::{Constants, Evaluator, Expr, BinOp, Value};
    ///
    /// let constants: Constants = [("x", Value::Integer(10))].into_iter().collect();
    /// let expr = Expr::BinaryOp {
    ///     op: BinOp::Add,
    ///     left: Box::new(Expr::Name("x".into())),
    ///     right: Box::new(Expr::Integer(5)),
    /// };
    ///
    /// let result = Evaluator::new(&constants).eval(&expr).unwrap();
    /// assert_eq!(result, Value::Integer(15));
    /// ```
    pub fn eval(&self, expr: &Expr) -> Result<Value, EvalError> {
        match expr {
            Expr::Integer(n) => Ok(Value::Integer(*n)),
            Expr::Float(n) => Ok(Value::Float(*n)),
            Expr::Name(name) => match self.constants.get(name) {
                Some(value) if value.is_numeric() => Ok(value.clone()),
                Some(_) => Err(EvalError::NonNumeric(name.clone())),
                None => Err(EvalError::UnknownVariable(name.clone())),
            },
            Expr::BinaryOp { op, left, right } => {
                let left_val = self.eval(left)?;
                let right_val = self.eval(right)?;
                apply_binop(*op, &left_val, &right_val)
            }
            Expr::Max(args) => {
                let mut best: Option<Value> = None;
                for arg in args {
                    let value = self.eval(arg)?;
                    best = match best {
                        Some(current) if !is_greater(&value, &current) => Some(current),
                        _ => Some(value),
                    };
                }
                best.ok_or(EvalError::EmptyCall)
            }
        }
    }
}

fn is_greater(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => x > y,
        _ => match (a.as_float(), b.as_float()) {
            (Some(x), Some(y)) => x > y,
            _ => false,
        },
    }
}

fn apply_binop(op: BinOp, left: &Value, right: &Value) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => {
            let result = match op {
                BinOp::Add => a.checked_add(*b),
                BinOp::Subtract => a.checked_sub(*b),
            };
            result
                .map(Value::Integer)
                .ok_or_else(|| EvalError::Overflow(format!("{} {} {}", a, op, b)))
        }
        _ => match (left.as_float(), right.as_float()) {
            (Some(a), Some(b)) => Ok(Value::Float(float_binop(op, a, b))),
            // Operands come out of `eval`, which only yields numbers
            _ => Err(EvalError::NonNumeric(format!("{} {} {}", left, op, right))),
        },
    }
}

fn float_binop(op: BinOp, a: f64, b: f64) -> f64 {
    match op {
        BinOp::Add => a + b,
        BinOp::Subtract => a - b,
    }
}

/// Returns true when a string is a constant expression, i.e. it starts and
/// ends with `|`.
pub fn is_constant_expression(text: &str) -> bool {
    text.starts_with('|') && text.ends_with('|')
}

/// Parses and evaluates expression source against the constants table.
pub fn evaluate(source: &str, constants: &Constants) -> Result<Value, Error> {
    let mut parser = Parser::new(Lexer::new(source))?;
    let expr = parser.parse()?;
    let value = Evaluator::new(constants).eval(&expr)?;
    log::debug!("evaluated |{}| to {}", source.trim(), value);
    Ok(value)
}

/// Evaluates a pipe-delimited constant expression such as `|x + 1|`.
pub fn evaluate_constant_expression(text: &str, constants: &Constants) -> Result<Value, Error> {
    let inner = text
        .strip_prefix('|')
        .and_then(|rest| rest.strip_suffix('|'))
        .unwrap_or("");
    evaluate(inner, constants)
}
