mod context;
mod error;
mod lex;
mod parser;

pub use error::{LexError, ParseError};
pub use lex::{lex, LexOutput};
pub use parser::parse;
