use super::context::MAX_DEPTH;
use crate::report::Diagnostic;
use crate::token::{Token, TokenKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("Unexpected character `{ch}`")]
    UnexpectedCharacter { ch: char, line: usize },

    #[error("Unterminated string")]
    UnterminatedString { line: usize },
}

impl Diagnostic for LexError {
    fn line(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { line, .. } => *line,
            LexError::UnterminatedString { line } => *line,
        }
    }

    fn location(&self) -> String {
        String::new()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Expression expected but `{}` found", .0.kind)]
    ExpressionExpected(Token),

    #[error("Expect `{expected}` after expression")]
    UnclosedGroup { expected: TokenKind, found: Token },

    #[error("Unfinished expression, leftover tokens start with `{0}`")]
    Unfinished(Token),

    #[error("Expression nested too deeply, limit is {} levels", MAX_DEPTH)]
    TooDeep(Token),
}

impl ParseError {
    pub fn token(&self) -> &Token {
        match self {
            ParseError::ExpressionExpected(token) => token,
            ParseError::UnclosedGroup { found, .. } => found,
            ParseError::Unfinished(token) => token,
            ParseError::TooDeep(token) => token,
        }
    }
}

impl Diagnostic for ParseError {
    fn line(&self) -> usize {
        self.token().line
    }

    fn location(&self) -> String {
        let token = self.token();
        if token.is_eof() {
            " at end".to_string()
        } else {
            format!(" at '{}'", token.lexeme)
        }
    }
}
