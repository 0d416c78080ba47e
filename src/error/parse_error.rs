#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The expression contained no tokens at all.
    EmptyExpression,
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// The byte position where the error occurred.
        position: usize,
    },
    /// Reached the end of input while a value was still expected.
    UnexpectedEndOfInput {
        /// The byte position where the error occurred.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The byte position where the error occurred.
        position: usize,
    },
    /// A numeric literal could not be parsed as a double-precision value.
    MalformedNumber {
        /// The literal text as lexed.
        text:     String,
        /// The byte position where the error occurred.
        position: usize,
    },
    /// Found extra tokens after parsing should have completed.
    TrailingTokens {
        /// The extra/unexpected token.
        token:    String,
        /// The byte position where the error occurred.
        position: usize,
    },
    /// The lexer encountered a character outside the recognized alphabet.
    UnrecognizedCharacter {
        /// The offending slice of the source text.
        text:     String,
        /// The byte position where the error occurred.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Error: Expression is empty."),

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at position {position}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at position {position}: Expected closing parenthesis ')' but none found."),

            Self::MalformedNumber { text, position } => write!(f,
                                                               "Error at position {position}: '{text}' is not a valid number."),

            Self::TrailingTokens { token, position } => write!(f,
                                                               "Error at position {position}: Extra tokens after expression. Check your input: {token}"),

            Self::UnrecognizedCharacter { text, position } => write!(f,
                                                                     "Error at position {position}: Unrecognized character: '{text}'."),
        }
    }
}

impl std::error::Error for ParseError {}
