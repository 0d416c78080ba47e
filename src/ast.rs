/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` covers every construct the grammar can produce: numeric literals,
/// unary sign applications, and binary arithmetic operations. Each variant
/// carries the byte position of the construct in the source text so that
/// errors raised during evaluation can point back at the offending operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal value.
    Literal {
        /// The parsed double-precision value.
        value:    f64,
        /// Byte position in the source text.
        position: usize,
    },
    /// A unary sign application (e.g. `-x` or `+x`).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte position in the source text.
        position: usize,
    },
    /// A binary operation (addition, subtraction, multiplication, division).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte position of the operator in the source text.
        position: usize,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use rdcalc::ast::Expr;
    ///
    /// let expr = Expr::Literal { value:    1.5,
    ///                            position: 4, };
    ///
    /// assert_eq!(expr.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. } => *position,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators cover the four arithmetic operations. All of them are
/// left-associative and evaluated with double-precision semantics.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a unary operator.
///
/// A unary operator is a single sign written directly before a parenthesized
/// expression or a numeric literal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Explicit positive sign (e.g. `+x`); evaluates to its operand.
    Plus,
}
