use infixa::{
    error::{Error, SyntaxError},
    evaluate,
    interpreter::{converter::to_postfix, lexer::tokenize, validator::validate},
};

fn assert_value(expression: &str, expected: f64) {
    match evaluate(expression) {
        Ok(value) => {
            assert!((value - expected).abs() < 1e-9,
                    "`{expression}` evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("`{expression}` failed to evaluate: {e}"),
    }
}

fn assert_nan(expression: &str) {
    match evaluate(expression) {
        Ok(value) => {
            assert!(value.is_nan(), "`{expression}` evaluated to {value}, expected NaN");
        },
        Err(e) => panic!("`{expression}` failed to evaluate: {e}"),
    }
}

fn assert_syntax_error(expression: &str) {
    match evaluate(expression) {
        Ok(value) => panic!("`{expression}` evaluated to {value} but should have been rejected"),
        Err(Error::Eval(e)) => {
            panic!("`{expression}` hit an internal error instead of a syntax error: {e}")
        },
        Err(Error::Syntax(_)) => {},
    }
}

#[test]
fn simple_operations() {
    assert_value("3+10", 13.0);
    assert_value("2*3", 6.0);
    assert_value("3/2", 1.5);
    assert_value("0.5*3", 1.5);
    assert_value(".1*10", 1.0);
    assert_value("5%2", 1.0);
    assert_value("2^10", 1024.0);
}

#[test]
fn precedence_and_parentheses() {
    assert_value("2+2*3", 8.0);
    assert_value("(2+2)*3", 12.0);
    assert_value("2+3*4^2", 50.0);
    assert_value("10-4-3", 3.0);
    assert_value("16/4/2", 2.0);
}

#[test]
fn power_is_right_associative() {
    assert_value("2^3^2", 512.0);
    assert_value("2^-3", 0.125);
}

#[test]
fn implicit_multiplication() {
    assert_value("2(3)", 6.0);
    assert_value("(2)(1.5)3", 9.0);
    assert_value("2.2(.5+1.5)", 4.4);
    assert_value("(1+1)(2+1)", 6.0);
    assert_value("(2)2", 4.0);
    assert_value("2sqrt(9)2", 12.0);
}

#[test]
fn unary_minus() {
    assert_value("-3", -3.0);
    assert_value("-2.2(.5+1.5)", -4.4);
    assert_value("2--3", 5.0);
    assert_value("(-3)", -3.0);
    assert_value("-2*(sqrt(6+3)/2)", -3.0);
    // Unary minus binds tighter than the power operator.
    assert_value("-2^2", 4.0);
}

#[test]
fn functions() {
    assert_value("sqrt(9)", 3.0);
    assert_value("sqrt(6+3)", 3.0);
    assert_value("cbrt(27)", 3.0);
    assert_value("abs(-4)", 4.0);
    assert_value("abs(4)", 4.0);
    assert_value("exp(0)", 1.0);
    assert_value("ln(1)", 0.0);
    assert_value("log(1000)", 3.0);
    assert_value("sin(0)", 0.0);
    assert_value("cos(0)", 1.0);
    assert_value("tan(0)", 0.0);
    assert_value("sqrt(sqrt(16))", 2.0);
}

#[test]
fn modulo_truncates_its_operands() {
    assert_value("5.9%2", 1.0);
    assert_value("5%2.9", 1.0);
    assert_value("-5.9%2", -1.0);
}

#[test]
fn undefined_arithmetic_is_nan_not_an_error() {
    assert_nan("sqrt(-2)");
    assert_nan("1/0");
    assert_nan("0/0");
    assert_nan("5%0");
    // A divisor that truncates to zero divides by zero.
    assert_nan("5%0.4");
    assert_nan("ln(0)");
    assert_nan("log(-1)");
    // NaN propagates through everything above it.
    assert_nan("(1/0)+1");
    assert_nan("2*sqrt(-9)");
    assert_nan("(1/0)%5");
    assert_nan("5%(1/0)");
}

#[test]
fn syntax_errors() {
    assert_syntax_error(".");
    assert_syntax_error("5%");
    assert_syntax_error("(1+2");
    assert_syntax_error("1+2)");
    assert_syntax_error("2..5");
    assert_syntax_error("2.");
    assert_syntax_error("--2");
    assert_syntax_error("2++2");
    assert_syntax_error("*2");
    assert_syntax_error("2*");
    assert_syntax_error("sqrt");
    assert_syntax_error("sqrt2");
    assert_syntax_error("foo(2)");
    assert_syntax_error("x");
    assert_syntax_error("2!3");
    assert_syntax_error("");
    assert_syntax_error("   ");
}

#[test]
fn diagnostics_carry_the_source_column() {
    match evaluate("2+2..5") {
        Err(Error::Syntax(SyntaxError::MalformedNumber { lexeme, column })) => {
            assert_eq!(lexeme, "2..5");
            assert_eq!(column, 3);
        },
        other => panic!("expected a malformed-number diagnostic, got {other:?}"),
    }

    match evaluate("1+foo(2)") {
        Err(Error::Syntax(SyntaxError::UnknownFunction { name, column })) => {
            assert_eq!(name, "foo");
            assert_eq!(column, 3);
        },
        other => panic!("expected an unknown-function diagnostic, got {other:?}"),
    }
}

#[test]
fn value_gaps_are_internal_errors() {
    // These pass the grammar rules but leave the value stack unbalanced;
    // the evaluator must refuse them instead of returning the top value.
    assert!(matches!(evaluate("()"), Err(Error::Eval(_))));
    assert!(matches!(evaluate("(2).5"), Err(Error::Eval(_))));
}

#[test]
fn evaluation_is_reproducible() {
    for expression in ["2sqrt(9)2", "-2.2(.5+1.5)", "5%2", "(1+2"] {
        let first = evaluate(expression);
        let second = evaluate(expression);

        match (first, second) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(_), Err(_)) => {},
            (a, b) => panic!("`{expression}` was not reproducible: {a:?} vs {b:?}"),
        }
    }
}

#[test]
fn postfix_is_never_longer_than_infix() {
    for expression in ["3+10", "2sqrt(9)2", "-2.2(.5+1.5)", "2^-3", "(2)(1.5)3", "2+3*4^2"] {
        let tokens = tokenize(expression).unwrap();
        validate(&tokens).unwrap();

        assert!(to_postfix(&tokens).len() <= tokens.len(),
                "postfix for `{expression}` is longer than its infix form");
    }
}

#[test]
fn postfix_order() {
    fn postfix_of(expression: &str) -> String {
        let tokens = tokenize(expression).unwrap();
        validate(&tokens).unwrap();

        to_postfix(&tokens).iter()
                           .map(|(token, _)| token.to_string())
                           .collect::<Vec<_>>()
                           .join(" ")
    }

    assert_eq!(postfix_of("2+3*4"), "2 3 4 * +");
    assert_eq!(postfix_of("(2+3)*4"), "2 3 + 4 *");
    assert_eq!(postfix_of("2^3^2"), "2 3 2 ^ ^");
    assert_eq!(postfix_of("2sqrt(9)"), "2 9 sqrt *");
}
