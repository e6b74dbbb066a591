pub mod ast;
pub mod cli;
pub mod input;
pub mod lexer;
pub mod literal;
pub mod output;
pub mod parser;
pub mod value;

pub use ast::{Array, Forest, Generator, Object, Token, TokenKind};
pub use input::{InputError, join_lines, parse_lines, parse_reader};
pub use lexer::{LexError, Lexer};
pub use literal::{LiteralError, Scalar};
pub use output::{OutputFormat, to_json, to_json_pretty, to_yaml};
pub use parser::{ErrorKind, MAX_DEPTH, ParseError, Parser, parse_str};
pub use value::Value;
