//! # Constant Expressions - Abstract Syntax Tree
//!
//! Values written between pipes (`"|x + 1|"`) are small arithmetic
//! expressions evaluated at translation time against the declared constants.
//! This module defines the tokens and syntax tree for that language.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (literals, names, operations, calls)
//! - **[operators]** - Binary operators
//!
//! ## Grammar
//!
//! ```text
//! expr := term (('+' | '-') term)*
//! term := INTEGER | FLOAT | NAME | 'max' '(' expr (',' expr)* ')' | '(' expr ')'
//! ```
//!
//! The tree only has room for what the grammar allows. Everything else
//! (other operators, other functions, string literals) is rejected by the
//! parser, so evaluation never sees it.
//!
//! ## Examples
//!
//! ```text
//! |x + y|
//! |max(x + 10, y)|
//! |base - 1.5|
//! ```
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::Expr;
pub use operators::BinOp;
pub use tokens::Token;
