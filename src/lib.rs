pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod document;
pub mod error;
pub mod evaluator;
pub mod identifier;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod preprocess;
pub mod translator;
pub mod value;

pub use ast::{BinOp, Expr, Token};
pub use document::{DocumentParser, InputFormat, JsonParser, Node, Scalar, TomlParser};
pub use error::Error;
pub use evaluator::{EvalError, Evaluator, evaluate};
pub use lexer::{LexError, Lexer};
pub use output::{Printer, to_lines};
pub use parser::{ParseError, Parser};
pub use translator::{Translation, translate, translate_with};
pub use value::{Constants, Value};
