use std::cmp::Ordering;

use super::error::RuntimeError;
use super::value::Value;
use crate::ast::{BinaryOpNode, Expression, UnaryOpNode};
use crate::token::{Token, TokenKind};

/// Tree-walking evaluator.
///
/// Holds no state between calls, so the same tree may be evaluated any number
/// of times with the same result.
#[derive(Debug, Default, Clone, Copy)]
pub struct Interpreter;

impl Interpreter {
    pub fn new() -> Self {
        Self
    }

    pub fn interpret(&self, expr: &Expression) -> Result<Value, RuntimeError> {
        self.interpret_expr(expr)
    }

    fn interpret_expr(&self, expr: &Expression) -> Result<Value, RuntimeError> {
        match expr {
            Expression::Literal(node) => Ok(Value::from(node)),
            Expression::Grouping(inner) => self.interpret_expr(inner),
            Expression::UnaryOp(node) => self.interpret_unary_op(node),
            Expression::BinaryOp(node) => self.interpret_binary_op(node),
        }
    }

    fn interpret_unary_op(
        &self,
        UnaryOpNode { op, operand }: &UnaryOpNode,
    ) -> Result<Value, RuntimeError> {
        let res = self.interpret_expr(operand)?;
        match op.kind {
            TokenKind::Bang => Ok(Value::Bool(!res.is_truthy())),
            TokenKind::Minus => Ok(Value::Number(-extract_number(&res, op)?)),
            _ => Err(RuntimeError::UnknownOperation(op.clone())),
        }
    }

    fn interpret_binary_op(
        &self,
        BinaryOpNode { lhs, op, rhs }: &BinaryOpNode,
    ) -> Result<Value, RuntimeError> {
        let lhs = self.interpret_expr(lhs)?;
        let rhs = self.interpret_expr(rhs)?;

        match op.kind {
            TokenKind::Plus => add(&lhs, op, &rhs),
            TokenKind::Minus => arithmetic(&lhs, op, &rhs, |l, r| l - r),
            TokenKind::Star => arithmetic(&lhs, op, &rhs, |l, r| l * r),
            TokenKind::Slash => divide(&lhs, op, &rhs),
            TokenKind::EqualEqual => Ok(Value::Bool(lhs.is_equal(&rhs))),
            TokenKind::BangEqual => Ok(Value::Bool(!lhs.is_equal(&rhs))),
            TokenKind::Less | TokenKind::LessEqual | TokenKind::Greater | TokenKind::GreaterEqual => {
                compare(&lhs, op, &rhs)
            }
            _ => Err(RuntimeError::UnknownOperation(op.clone())),
        }
    }
}

fn compare(lhs: &Value, op: &Token, rhs: &Value) -> Result<Value, RuntimeError> {
    let l = extract_number(lhs, op)?;
    let r = extract_number(rhs, op)?;
    // NaN is unordered, every comparison with it is false
    let Some(o) = l.partial_cmp(&r) else {
        return Ok(Value::Bool(false));
    };
    let from_ord = |o: Ordering| match op.kind {
        TokenKind::Less => Ok(Value::Bool(o.is_lt())),
        TokenKind::LessEqual => Ok(Value::Bool(o.is_le())),
        TokenKind::Greater => Ok(Value::Bool(o.is_gt())),
        TokenKind::GreaterEqual => Ok(Value::Bool(o.is_ge())),
        _ => Err(RuntimeError::UnknownOperation(op.clone())),
    };
    from_ord(o)
}

fn add(lhs: &Value, op: &Token, rhs: &Value) -> Result<Value, RuntimeError> {
    match (lhs, rhs) {
        (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
        (Value::Str(_), _) | (_, Value::Str(_)) => Ok(Value::Str(format!("{}{}", lhs, rhs))),
        _ => Err(RuntimeError::MismatchType(op.clone(), lhs.clone(), rhs.clone())),
    }
}

fn arithmetic(
    lhs: &Value,
    op: &Token,
    rhs: &Value,
    f: impl Fn(f64, f64) -> f64,
) -> Result<Value, RuntimeError> {
    let l = extract_number(lhs, op)?;
    let r = extract_number(rhs, op)?;
    Ok(Value::Number(f(l, r)))
}

fn divide(lhs: &Value, op: &Token, rhs: &Value) -> Result<Value, RuntimeError> {
    let l = extract_number(lhs, op)?;
    let r = extract_number(rhs, op)?;
    if r == 0.0 {
        return Err(RuntimeError::DivideByZero(op.clone()));
    }
    Ok(Value::Number(l / r))
}

fn extract_number(v: &Value, op: &Token) -> Result<f64, RuntimeError> {
    if let Value::Number(n) = v {
        Ok(*n)
    } else {
        Err(RuntimeError::OperandNotNumber(op.clone(), v.clone()))
    }
}
