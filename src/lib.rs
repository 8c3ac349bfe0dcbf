//! Front-end for a small dynamically-typed expression language.
//!
//! Source text is scanned into tokens, parsed into an expression tree and the
//! tree is evaluated to a value. Problems are handed to a [`report::Reporter`]
//! and summarized by the returned [`Outcome`]; nothing in here exits the
//! process or keeps global state.

pub mod ast;
pub mod interpret;
pub mod parse;
pub mod printer;
pub mod report;
pub mod token;

use log::{debug, trace};

use crate::ast::Expression;
use crate::interpret::{Interpreter, Value};
use crate::report::{emit, Reporter};

/// Result of running one piece of source.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(Value),
    /// Lexical or syntax error, the tree was not evaluated.
    StaticError,
    RuntimeError,
}

impl Outcome {
    pub fn value(&self) -> Option<&Value> {
        match self {
            Outcome::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }
}

/// Scans and parses `input`, reporting every lexical and syntax error.
///
/// Returns `None` when anything went wrong, even if the parser managed to
/// build a tree out of the tokens that did scan.
pub fn parse_source(input: &str, reporter: &mut dyn Reporter) -> Option<Expression> {
    let output = parse::lex(input);
    for err in &output.errors {
        emit(reporter, err);
    }
    debug!(
        "scanned {} tokens, {} lex errors",
        output.tokens.len(),
        output.errors.len()
    );

    let expr = match parse::parse(&output.tokens) {
        Ok(expr) => expr,
        Err(err) => {
            emit(reporter, &err);
            return None;
        }
    };

    if output.has_errors() {
        return None;
    }
    Some(expr)
}

/// Runs `input` through the whole pipeline.
pub fn run(input: &str, reporter: &mut dyn Reporter) -> Outcome {
    let Some(expr) = parse_source(input, reporter) else {
        return Outcome::StaticError;
    };

    match Interpreter::new().interpret(&expr) {
        Ok(value) => {
            trace!("{:?}", value);
            Outcome::Value(value)
        }
        Err(err) => {
            emit(reporter, &err);
            Outcome::RuntimeError
        }
    }
}
