use crate::ast::BinOp;

/// Abstract Syntax Tree node representing a parsed constant expression.
///
/// Each variant has exactly one evaluation rule in the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal integer
    ///
    /// # Example
    /// ```text
    /// 42
    /// ```
    Integer(i64),

    /// Literal floating point number
    ///
    /// # Example
    /// ```text
    /// 3.14
    /// ```
    Float(f64),

    /// Reference to a declared constant
    ///
    /// # Example
    /// ```text
    /// port_base
    /// ```
    Name(String),

    /// Addition or subtraction of two operands
    ///
    /// # Examples
    /// ```text
    /// x + y
    /// base - 1
    /// ```
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Variadic maximum. `max` is the only callable name.
    ///
    /// # Example
    /// ```text
    /// max(x, y, 10)
    /// ```
    Max(Vec<Expr>),
}
