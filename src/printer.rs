use crate::ast::{BinaryOpNode, Expression, LiteralNode, UnaryOpNode};
use crate::interpret::Value;

/// Renders `expr` in parenthesized prefix form, e.g. `(* (- 123) (grouping 45.67))`.
pub fn print(expr: &Expression) -> String {
    match expr {
        Expression::Literal(node) => print_literal(node),
        Expression::Grouping(inner) => parenthesize("grouping", &[&**inner]),
        Expression::UnaryOp(UnaryOpNode { op, operand }) => {
            parenthesize(&op.lexeme, &[&**operand])
        }
        Expression::BinaryOp(BinaryOpNode { lhs, op, rhs }) => {
            parenthesize(&op.lexeme, &[&**lhs, &**rhs])
        }
    }
}

fn print_literal(node: &LiteralNode) -> String {
    // literals print exactly like the value they evaluate to
    Value::from(node).to_string()
}

fn parenthesize(name: &str, children: &[&Expression]) -> String {
    let mut out = format!("({}", name);
    for child in children {
        out.push(' ');
        out.push_str(&print(child));
    }
    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Token, TokenKind};

    #[test]
    fn print_nested_expression() {
        let expr = Expression::binary(
            Expression::unary(
                Token::new(TokenKind::Minus, "-", 1),
                Expression::literal(LiteralNode::Number(123.0)),
            ),
            Token::new(TokenKind::Star, "*", 1),
            Expression::grouping(Expression::literal(LiteralNode::Number(45.67))),
        );
        assert_eq!(print(&expr), "(* (- 123) (grouping 45.67))");
    }

    #[test]
    fn print_literals() {
        assert_eq!(print(&Expression::literal(LiteralNode::Nil)), "nil");
        assert_eq!(print(&Expression::literal(LiteralNode::Bool(false))), "false");
        assert_eq!(
            print(&Expression::literal(LiteralNode::Str("a b".to_string()))),
            "a b"
        );
    }
}
