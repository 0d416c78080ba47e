use rdcalc::{
    error::{Error, ParseError, RuntimeError},
    evaluate, evaluate_value,
};

fn assert_result(statement: &str, expected: &str) {
    match evaluate(statement) {
        Some(result) => {
            assert_eq!(result, expected, "wrong result for {statement:?}");
        },
        None => panic!("Statement {statement:?} was rejected but {expected:?} was expected"),
    }
}

fn assert_invalid(statement: &str) {
    if let Some(result) = evaluate(statement) {
        panic!("Statement {statement:?} produced {result:?} but was expected to be invalid");
    }
}

#[test]
fn literals_and_basic_arithmetic() {
    assert_result("0", "0.0000");
    assert_result("42", "42.0000");
    assert_result("1+2", "3.0000");
    assert_result("8-5", "3.0000");
    assert_result("7*9", "63.0000");
    assert_result("10/2", "5.0000");
}

#[test]
fn precedence_and_parentheses() {
    assert_result("1+2*3", "7.0000");
    assert_result("(1+2)*3", "9.0000");
    assert_result("2*(3+4)", "14.0000");
    assert_result("((2))", "2.0000");
    assert_result("(1 + 38) * 4.5 - 1 / 2", "175.0000");
}

#[test]
fn same_precedence_is_left_associative() {
    assert_result("8-3-2", "3.0000");
    assert_result("2-3+4", "3.0000");
    assert_result("100/5/2", "10.0000");
    assert_result("12/3*2", "8.0000");
}

#[test]
fn each_slash_divides_exactly_once() {
    assert_result("8/2", "4.0000");
    assert_result("10/4", "2.5000");
    assert_result("1/2/2", "0.2500");
}

#[test]
fn results_round_half_to_even_at_four_digits() {
    assert_result("1/3", "0.3333");
    assert_result("2/3", "0.6667");
    assert_result("2/8", "0.2500");
    assert_result("0.1+0.2", "0.3000");
    // Exact ties at the fourth digit: 1/32 = 0.03125, 3/32 = 0.09375.
    assert_result("1/32", "0.0312");
    assert_result("3/32", "0.0938");
}

#[test]
fn unary_sign() {
    assert_result("-5+3", "-2.0000");
    assert_result("4*-2", "-8.0000");
    assert_result("4/+2", "2.0000");
    assert_result("+5", "5.0000");
    assert_result("-(1+2)", "-3.0000");
    assert_result("-(-5)", "5.0000");
}

#[test]
fn doubled_sign_without_parentheses_is_invalid() {
    assert_invalid("--5");
    assert_invalid("- -5");
    assert_invalid("+-5");
}

#[test]
fn decimal_literals() {
    assert_result("4.5*2", "9.0000");
    assert_result("1.", "1.0000");
    assert_result("0.0625*2", "0.1250");
    assert_invalid(".5");
}

#[test]
fn whitespace_is_ignored_between_tokens() {
    assert_result("  1 +\t2 ", "3.0000");
    assert_result("1\n+\n2", "3.0000");
}

#[test]
fn division_by_zero_is_invalid() {
    assert_invalid("1/0");
    assert_invalid("1/(3-3)");
    assert_invalid("1/0.0");
    assert_result("0/5", "0.0000");
}

#[test]
fn unbalanced_parentheses_are_invalid() {
    assert_invalid("(1+2");
    assert_invalid("1+2)");
    assert_invalid("((1+2)");
    assert_invalid(")");
    assert_invalid("()");
}

#[test]
fn empty_or_blank_input_is_invalid() {
    assert_invalid("");
    assert_invalid("   ");
    assert_invalid("\t\n");
}

#[test]
fn malformed_literals_are_invalid() {
    assert_invalid("4.5.6");
    assert_invalid("1..2");
    assert_invalid("1.2.3+4");
}

#[test]
fn unrecognized_characters_are_invalid() {
    assert_invalid("2+a");
    assert_invalid("two");
    assert_invalid("1^2");
    assert_invalid("1,5+2");
}

#[test]
fn equals_sign_is_lexed_but_never_parses() {
    assert_invalid("1 = 1");
    assert_invalid("=1");
    assert_invalid("1+=2");
}

#[test]
fn trailing_input_is_invalid() {
    assert_invalid("1 2");
    assert_invalid("(1+2)3");
    assert_invalid("1+2 3*4");
}

#[test]
fn dangling_operators_are_invalid() {
    assert_invalid("1+");
    assert_invalid("*2");
    assert_invalid("1+*2");
    assert_invalid("(+)");
}

#[test]
fn negative_zero_renders_as_zero() {
    assert_result("-0", "0.0000");
    assert_result("-0.5*0", "0.0000");
}

#[test]
fn overflowing_result_is_invalid() {
    let huge = "9".repeat(400);
    assert_invalid(&huge);
    assert_invalid(&format!("{huge}*2"));
}

#[test]
fn evaluation_is_idempotent() {
    let statement = "(1+2)*3 - 4/8";
    let first = evaluate(statement);
    let second = evaluate(statement);
    assert_eq!(first, second);
    assert_eq!(first, Some("8.5000".to_string()));
}

#[test]
fn error_kinds_are_distinguishable() {
    assert!(matches!(evaluate_value(""),
                     Err(Error::Parse(ParseError::EmptyExpression))));
    assert!(matches!(evaluate_value("   "),
                     Err(Error::Parse(ParseError::EmptyExpression))));
    assert!(matches!(evaluate_value("(1+2"),
                     Err(Error::Parse(ParseError::ExpectedClosingParen { .. }))));
    assert!(matches!(evaluate_value("1+2)"),
                     Err(Error::Parse(ParseError::TrailingTokens { .. }))));
    assert!(matches!(evaluate_value("4.5.6"),
                     Err(Error::Parse(ParseError::MalformedNumber { .. }))));
    assert!(matches!(evaluate_value("2+a"),
                     Err(Error::Parse(ParseError::UnrecognizedCharacter { .. }))));
    assert!(matches!(evaluate_value("1*=2"),
                     Err(Error::Parse(ParseError::UnexpectedToken { .. }))));
    assert!(matches!(evaluate_value("1+"),
                     Err(Error::Parse(ParseError::UnexpectedEndOfInput { .. }))));
    assert!(matches!(evaluate_value("1/0"),
                     Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
}

#[test]
fn error_positions_point_at_the_source() {
    match evaluate_value("10 / 0") {
        Err(Error::Runtime(RuntimeError::DivisionByZero { position })) => {
            assert_eq!(position, 3);
        },
        other => panic!("Expected division by zero, got {other:?}"),
    }

    match evaluate_value("1 + x") {
        Err(Error::Parse(ParseError::UnrecognizedCharacter { text, position })) => {
            assert_eq!(text, "x");
            assert_eq!(position, 4);
        },
        other => panic!("Expected unrecognized character, got {other:?}"),
    }
}

#[test]
fn raw_values_skip_rounding() {
    assert_eq!(evaluate_value("1+2*3").unwrap(), 7.0);
    assert_eq!(evaluate_value("1/3").unwrap(), 1.0 / 3.0);
    assert_eq!(evaluate_value("4*-2").unwrap(), -8.0);
}
