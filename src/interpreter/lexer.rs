use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the expression language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `4.5` or `1.`.
    ///
    /// The dot is swallowed into the literal rather than treated as a
    /// delimiter, so `4.5` lexes as one token. The raw text is kept as-is:
    /// a malformed literal like `4.5.6` also lexes as a single token, and
    /// its numeric conversion fails later in the parser.
    #[regex(r"[0-9][0-9.]*", |lex| lex.slice().to_string())]
    Number(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`; lexed for compatibility with the historical delimiter set, but
    /// no grammar rule accepts it, so it always fails parsing downstream.
    #[token("=")]
    Equals,
    /// Whitespace between tokens.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

/// Tokenizes an entire expression into `(token, position)` pairs.
///
/// Positions are byte offsets into `source` and are monotonically
/// non-decreasing. The lexer holds no state beyond this call, so repeated
/// invocations on the same input always produce the same stream.
///
/// # Parameters
/// - `source`: The expression text to tokenize.
///
/// # Returns
/// The full token stream, or `ParseError::UnrecognizedCharacter` for the
/// first character outside the recognized alphabet.
///
/// # Example
/// ```
/// use rdcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number("1".to_string()), 0),
///                 (Token::Plus, 2),
///                 (Token::Number("2".to_string()), 4)]);
///
/// assert!(tokenize("2 + a").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            return Err(ParseError::UnrecognizedCharacter { text:     lexer.slice().to_string(),
                                                           position: lexer.span().start, });
        }
    }

    Ok(tokens)
}
