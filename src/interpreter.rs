/// The evaluator module computes the numeric result of a parsed expression.
///
/// The evaluator folds the AST bottom-up, applying unary signs and binary
/// arithmetic with double-precision semantics. It is the execution engine of
/// the calculator.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Applies operators left-to-right as structured by the parser.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes an expression for further parsing.
///
/// The lexer (tokenizer) reads the raw input text and produces a stream of
/// tokens, each corresponding to a meaningful element: numeric literals,
/// operators, and parentheses. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Keeps the raw text of numeric literals for later validation.
/// - Reports lexical errors for characters outside the recognized alphabet.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that encodes operator precedence and associativity. One procedure
/// exists per precedence level, each calling the next-higher level.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with position info.
/// - Encodes precedence: additive below multiplicative below unary sign.
pub mod parser;
