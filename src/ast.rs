use crate::token::Token;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(LiteralNode),
    Grouping(Box<Expression>),
    UnaryOp(UnaryOpNode),
    BinaryOp(BinaryOpNode),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralNode {
    Nil,
    Bool(bool),
    Number(f64),
    Str(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOpNode {
    pub op: Token,
    pub operand: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOpNode {
    pub lhs: Box<Expression>,
    pub op: Token,
    pub rhs: Box<Expression>,
}

impl Expression {
    pub fn literal(node: LiteralNode) -> Self {
        Expression::Literal(node)
    }

    pub fn grouping(inner: Expression) -> Self {
        Expression::Grouping(Box::new(inner))
    }

    pub fn unary(op: Token, operand: Expression) -> Self {
        Expression::UnaryOp(UnaryOpNode {
            op,
            operand: Box::new(operand),
        })
    }

    pub fn binary(lhs: Expression, op: Token, rhs: Expression) -> Self {
        Expression::BinaryOp(BinaryOpNode {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        })
    }
}
