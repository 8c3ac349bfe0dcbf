use log::trace;

use super::context::Context;
use super::error::ParseError;
use crate::ast::{Expression, LiteralNode};
use crate::token::{Literal, Token, TokenKind};

/// Builds one expression tree out of `items`.
///
/// Either the whole token list up to `Eof` forms a single expression, or an
/// error is returned and no tree at all is produced.
pub fn parse(items: &[Token]) -> Result<Expression, ParseError> {
    let terminated;
    let items = match items.last() {
        None => return Err(ParseError::ExpressionExpected(Token::eof(1))),
        Some(last) if !last.is_eof() => {
            let eof = Token::eof(last.line);
            terminated = [items, std::slice::from_ref(&eof)].concat();
            &terminated[..]
        }
        Some(_) => items,
    };

    let mut state = Context::new(items);
    let expr = parse_expr(&mut state)?;

    if !state.is_at_end() {
        return Err(ParseError::Unfinished(state.peek().clone()));
    }

    trace!("{:?}", &expr);
    Ok(expr)
}

fn parse_expr(state: &mut Context) -> Result<Expression, ParseError> {
    parse_equality(state)
}

fn parse_equality(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(
        state,
        &[TokenKind::EqualEqual, TokenKind::BangEqual],
        parse_comparison,
    )
}

fn parse_comparison(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(
        state,
        &[
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
        ],
        parse_term,
    )
}

fn parse_term(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(state, &[TokenKind::Plus, TokenKind::Minus], parse_factor)
}

fn parse_factor(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(state, &[TokenKind::Star, TokenKind::Slash], parse_unary)
}

fn parse_recursive_binary<F>(
    state: &mut Context,
    match_tokens: &'static [TokenKind],
    lower_fn: F,
) -> Result<Expression, ParseError>
where
    F: Fn(&mut Context) -> Result<Expression, ParseError>,
{
    let mut lhs = lower_fn(state)?;

    while state.match_tokens(match_tokens) {
        let op = state.previous().clone();
        let rhs = lower_fn(state)?;
        lhs = Expression::binary(lhs, op, rhs);
    }

    Ok(lhs)
}

fn parse_unary(state: &mut Context) -> Result<Expression, ParseError> {
    if state.match_tokens(&[TokenKind::Bang, TokenKind::Minus]) {
        let op = state.previous().clone();
        state.enter(&op)?;
        let operand = parse_unary(state)?;
        state.leave();
        return Ok(Expression::unary(op, operand));
    }
    parse_primary(state)
}

fn parse_primary(state: &mut Context) -> Result<Expression, ParseError> {
    let li = state.peek();

    let node = match li.kind {
        TokenKind::False => LiteralNode::Bool(false),
        TokenKind::True => LiteralNode::Bool(true),
        TokenKind::Nil => LiteralNode::Nil,
        TokenKind::Number | TokenKind::String => match &li.literal {
            Some(Literal::Number(n)) => LiteralNode::Number(*n),
            Some(Literal::Str(s)) => LiteralNode::Str(s.clone()),
            None => return Err(ParseError::ExpressionExpected(li.clone())),
        },
        TokenKind::LeftParen => return parse_group(state),
        _ => return Err(ParseError::ExpressionExpected(li.clone())),
    };

    state.advance();
    Ok(Expression::literal(node))
}

fn parse_group(state: &mut Context) -> Result<Expression, ParseError> {
    let paren = state.advance(); // consume '('
    state.enter(paren)?;
    let expr = parse_expr(state)?;
    state.leave();

    if state.consume_token(TokenKind::RightParen).is_none() {
        return Err(ParseError::UnclosedGroup {
            expected: TokenKind::RightParen,
            found: state.peek().clone(),
        });
    }

    Ok(Expression::grouping(expr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::context::MAX_DEPTH;
    use crate::parse::lex;
    use crate::printer;
    use crate::report::Diagnostic;

    fn parse_str(input: &str) -> Result<Expression, ParseError> {
        let output = lex(input);
        assert!(!output.has_errors(), "{:?}", output.errors);
        parse(&output.tokens)
    }

    fn print_str(input: &str) -> String {
        printer::print(&parse_str(input).expect("input should parse"))
    }

    #[test]
    fn parse_literals() {
        assert_eq!(print_str("nil"), "nil");
        assert_eq!(print_str("true"), "true");
        assert_eq!(print_str("false"), "false");
        assert_eq!(print_str("12.5"), "12.5");
        assert_eq!(print_str("\"hi\""), "hi");
    }

    #[test]
    fn parse_precedence() {
        assert_eq!(print_str("1 + 2 * 3"), "(+ 1 (* 2 3))");
        assert_eq!(print_str("1 * 2 + 3"), "(+ (* 1 2) 3)");
        assert_eq!(
            print_str("1 < 2 == 3 >= 4"),
            "(== (< 1 2) (>= 3 4))"
        );
        assert_eq!(print_str("-1 * 2"), "(* (- 1) 2)");
    }

    #[test]
    fn parse_left_associative() {
        assert_eq!(print_str("1 - 2 - 3"), "(- (- 1 2) 3)");
        assert_eq!(print_str("8 / 4 / 2"), "(/ (/ 8 4) 2)");
        assert_eq!(print_str("1 == 2 != 3"), "(!= (== 1 2) 3)");
    }

    #[test]
    fn parse_nested_unary() {
        assert_eq!(print_str("!!true"), "(! (! true))");
        assert_eq!(print_str("- -1"), "(- (- 1))");
    }

    #[test]
    fn parse_grouping() {
        assert_eq!(print_str("(1 + 2) * 3"), "(* (grouping (+ 1 2)) 3)");
        assert_eq!(print_str("((nil))"), "(grouping (grouping nil))");
    }

    #[test]
    fn parse_unclosed_group() {
        let err = parse_str("(1 + 2").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnclosedGroup {
                expected: TokenKind::RightParen,
                ..
            }
        ));
        assert_eq!(err.location(), " at end");
    }

    #[test]
    fn parse_expression_expected() {
        let err = parse_str("1 + )").unwrap_err();
        assert!(matches!(err, ParseError::ExpressionExpected(_)));
        assert_eq!(err.location(), " at ')'");
        assert_eq!(err.line(), 1);

        let err = parse_str("").unwrap_err();
        assert!(matches!(err, ParseError::ExpressionExpected(ref t) if t.is_eof()));
    }

    #[test]
    fn parse_reserved_keyword_is_not_an_expression() {
        let err = parse_str("var").unwrap_err();
        assert!(matches!(err, ParseError::ExpressionExpected(ref t) if t.kind == TokenKind::Var));
    }

    #[test]
    fn parse_leftover_tokens() {
        let err = parse_str("1 2").unwrap_err();
        assert!(matches!(err, ParseError::Unfinished(ref t) if t.lexeme == "2"));
    }

    #[test]
    fn parse_error_line() {
        let err = parse_str("1 +\n\n*").unwrap_err();
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn parse_nesting_limit() {
        let input = format!("{}1", "(".repeat(10_000));
        let err = parse_str(&input).unwrap_err();
        assert!(matches!(err, ParseError::TooDeep(ref t) if t.kind == TokenKind::LeftParen));

        let input = format!("{}1", "-".repeat(10_000));
        let err = parse_str(&input).unwrap_err();
        assert!(matches!(err, ParseError::TooDeep(ref t) if t.kind == TokenKind::Minus));
    }

    #[test]
    fn parse_nesting_within_limit() {
        let depth = MAX_DEPTH;
        let input = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert!(parse_str(&input).is_ok());

        let input = format!("{}1{}", "(".repeat(depth + 1), ")".repeat(depth + 1));
        assert!(matches!(parse_str(&input), Err(ParseError::TooDeep(_))));

        // each group is closed before the next one opens
        let input = vec!["(1)"; 1_000].join(" + ");
        assert!(parse_str(&input).is_ok());
    }

    #[test]
    fn parse_empty_token_list() {
        assert!(parse(&[]).is_err());
    }
}
