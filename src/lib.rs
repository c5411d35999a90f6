pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod schema;
pub mod visitor;

pub use ast::{RangeValue, Statement, Token, Value};
pub use lexer::Lexer;
pub use parser::{translate_to_sql, Parser};
pub use render::as_string;
pub use schema::{Field, Schema};
pub use visitor::{used_columns, AliasResolver};
