use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports a single optional prefix sign:
/// - `-`  (numeric negation)
/// - `+`  (explicit positive sign, evaluates to its operand)
///
/// Exactly one sign is accepted, and it must be followed directly by a
/// primary expression. `4 * -2` and `-(1 + 2)` parse, while `--5` does not;
/// a doubled sign needs parentheses, as in `-(-5)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+")? primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a plain primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let expr = parse_primary(tokens)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           position })
    } else if let Some((Token::Plus, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let expr = parse_primary(tokens)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Plus,
                           expr: Box::new(expr),
                           position })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := literal
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { position: 0 })?;

    match peeked {
        (Token::Number(_), _) => parse_literal(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (tok, position) => Err(ParseError::UnexpectedToken { token:    format!("{tok:?}"),
                                                             position: *position, }),
    }
}

/// Parses a numeric literal.
///
/// The lexer hands over the raw literal text, dots included, so this is
/// where a malformed literal such as `4.5.6` is actually rejected: the text
/// lexes as one token but fails the conversion to `f64`.
///
/// Grammar: `literal := NUMBER`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a literal.
///
/// # Returns
/// An [`Expr::Literal`] containing the parsed value.
///
/// # Errors
/// Returns `ParseError::MalformedNumber` if the literal text is not a valid
/// floating-point number.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(text), position)) => {
            let value = text.parse()
                            .map_err(|_| ParseError::MalformedNumber { text:     text.clone(),
                                                                       position: *position, })?;
            Ok(Expr::Literal { value,
                               position: *position })
        },
        _ => unreachable!(),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, position) = *tokens.next().unwrap();
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { position }),
    }
}
