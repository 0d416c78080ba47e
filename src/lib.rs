//! # rdcalc
//!
//! rdcalc is a recursive-descent evaluator for plain arithmetic expressions.
//! It lexes, parses, and evaluates text containing decimal literals, the
//! four binary operators, unary sign, and parentheses, and renders the
//! result as a fixed-scale decimal string.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{Error, ParseError},
    interpreter::{evaluator::eval, lexer::tokenize, parser::core::parse_expression},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that
/// represent the syntactic structure of an expression as a tree. The AST is
/// built by the parser and folded by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for literals, unary sign, and binary
///   operations.
/// - Attaches source positions to AST nodes for error reporting.
/// - Provides display forms for operators.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating an expression. It standardizes error reporting and carries
/// detailed information about failures, including error kinds, descriptions,
/// and source positions for debugging and testing.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, and evaluation to provide a
/// complete pipeline from raw text to a numeric result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Fixed-scale decimal rendering of results.
///
/// This module turns the raw double produced by the evaluator into the
/// decimal string the public API returns, with a fixed scale and a fixed
/// rounding mode.
///
/// # Responsibilities
/// - Rounds results to four fractional digits, half-to-even.
/// - Rejects non-finite values instead of rendering them.
pub mod output;

/// Evaluates an arithmetic statement and renders the result.
///
/// The statement may contain digits, `.` as the decimal mark, parentheses,
/// and the operation signs `+`, `-`, `*`, `/`, separated by optional
/// whitespace. The result is rounded to four fractional digits using
/// round-half-to-even.
///
/// Any failure — lexical, syntactic, a malformed literal, division by zero,
/// or a non-finite result — yields `None`. This function never panics on
/// malformed input, and no state is carried between calls.
///
/// # Parameters
/// - `statement`: The expression text to evaluate.
///
/// # Returns
/// The rendered result, or `None` if the statement is invalid.
///
/// # Examples
/// ```
/// use rdcalc::evaluate;
///
/// assert_eq!(evaluate("(1 + 38) * 4.5 - 1 / 2"), Some("175.0000".to_string()));
/// assert_eq!(evaluate("1/3"), Some("0.3333".to_string()));
/// assert_eq!(evaluate("1/0"), None);
/// assert_eq!(evaluate("(1+2"), None);
/// ```
#[must_use]
pub fn evaluate(statement: &str) -> Option<String> {
    let value = evaluate_value(statement).ok()?;
    output::format_scaled(value)
}

/// Evaluates an arithmetic statement and returns the raw double value.
///
/// This is the same pipeline as [`evaluate`] without the rounding step, and
/// with the failure kind preserved: lexing, parsing, and evaluation errors
/// come back as [`Error`] variants instead of collapsing into a single
/// "invalid" outcome.
///
/// # Errors
/// Returns an error if the statement cannot be tokenized, is empty, does not
/// parse as a single complete expression, or fails to evaluate.
///
/// # Examples
/// ```
/// use rdcalc::{
///     error::{Error, ParseError, RuntimeError},
///     evaluate_value,
/// };
///
/// assert_eq!(evaluate_value("1 + 2 * 3").unwrap(), 7.0);
///
/// assert!(matches!(evaluate_value("1/0"),
///                  Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
/// assert!(matches!(evaluate_value(""),
///                  Err(Error::Parse(ParseError::EmptyExpression))));
/// ```
pub fn evaluate_value(statement: &str) -> Result<f64, Error> {
    let tokens = tokenize(statement)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression.into());
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    // The whole statement must be one expression; a stray `)` or a second
    // number would otherwise be silently ignored.
    if let Some((token, position)) = iter.next() {
        return Err(ParseError::TrailingTokens { token:    format!("{token:?}"),
                                                position: *position, }.into());
    }

    Ok(eval(&expr)?)
}
