use thiserror::Error;

use super::value::Value;
use crate::report::Diagnostic;
use crate::token::Token;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("Operand of `{0}` must be a number, got `{1}` of type {}", .1.type_name())]
    OperandNotNumber(Token, Value),

    #[error("Operand supports only strings or doubles, got {} and {}", .1.type_name(), .2.type_name())]
    MismatchType(Token, Value, Value),

    #[error("Unknown operator `{0}`")]
    UnknownOperation(Token),

    #[error("Divide by 0")]
    DivideByZero(Token),
}

impl RuntimeError {
    pub fn token(&self) -> &Token {
        match self {
            RuntimeError::OperandNotNumber(token, _) => token,
            RuntimeError::MismatchType(token, _, _) => token,
            RuntimeError::UnknownOperation(token) => token,
            RuntimeError::DivideByZero(token) => token,
        }
    }
}

impl Diagnostic for RuntimeError {
    fn line(&self) -> usize {
        self.token().line
    }

    fn location(&self) -> String {
        String::new()
    }
}
