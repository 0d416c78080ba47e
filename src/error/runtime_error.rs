#[derive(Debug)]
/// Represents all errors that can occur while evaluating a parsed expression.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The byte position of the `/` operator.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
