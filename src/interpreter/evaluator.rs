use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns the resulting value.
///
/// The evaluator recursively folds the AST: literals yield their value,
/// unary signs are applied to their operand, and binary operations combine
/// the values of both sides. The left-to-right order of equal-precedence
/// operators is already encoded in the tree shape built by the parser, so
/// the fold itself needs no precedence knowledge.
///
/// The evaluator carries no state. Every call is independent and reentrant.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
///
/// # Returns
/// The computed double-precision value.
///
/// # Errors
/// Returns `RuntimeError::DivisionByZero` when the right-hand operand of a
/// division evaluates to exactly `0.0`.
///
/// # Example
/// ```
/// use rdcalc::interpreter::{evaluator::eval, lexer::tokenize, parser::core::parse_expression};
///
/// let tokens = tokenize("(1 + 2) * 3").unwrap();
/// let expr = parse_expression(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(eval(&expr).unwrap(), 9.0);
/// ```
pub fn eval(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Literal { value, .. } => Ok(*value),
        Expr::UnaryOp { op, expr, .. } => {
            let value = eval(expr)?;
            Ok(match op {
                   UnaryOperator::Negate => -value,
                   UnaryOperator::Plus => value,
               })
        },
        Expr::BinaryOp { left,
                         op,
                         right,
                         position, } => {
            let lhs = eval(left)?;
            let rhs = eval(right)?;
            eval_binary(*op, lhs, rhs, *position)
        },
    }
}

/// Applies a binary arithmetic operator to two evaluated operands.
///
/// Division is checked: a right-hand operand of exactly `0.0` is rejected
/// rather than producing an infinity or NaN. Each `/` performs exactly one
/// division.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `lhs`: Left operand.
/// - `rhs`: Right operand.
/// - `position`: Byte position of the operator, for error reporting.
///
/// # Returns
/// An `EvalResult<f64>` containing the computed value.
///
/// # Example
/// ```
/// use rdcalc::{ast::BinaryOperator, interpreter::evaluator::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Div, 8.0, 2.0, 0).unwrap(), 4.0);
/// assert!(eval_binary(BinaryOperator::Div, 1.0, 0.0, 0).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, lhs: f64, rhs: f64, position: usize) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(lhs + rhs),
        BinaryOperator::Sub => Ok(lhs - rhs),
        BinaryOperator::Mul => Ok(lhs * rhs),
        BinaryOperator::Div => {
            if rhs == 0.0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            Ok(lhs / rhs)
        },
    }
}
