/// Parser entry point and shared result type.
///
/// Declares `parse_expression`, the lowest-precedence entry into the
/// recursive-descent hierarchy.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels, both
/// left-associative.
pub mod binary;

/// Unary and primary parsing.
///
/// Handles the optional leading sign, parenthesized groupings, and numeric
/// literals at the top of the precedence hierarchy.
pub mod unary;
