use crate::{error::EvalError, interpreter::lexer::Token};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the invariant that was violated.
pub type EvalResult<T> = Result<T, EvalError>;

/// Names of the builtin single-argument functions.
const BUILTIN_FUNCTIONS: &[&str] = &["sqrt", "cbrt", "abs", "exp", "ln", "log", "sin", "cos",
                                     "tan"];

/// Tells whether `name` refers to a builtin function.
///
/// The validator accepts exactly the words this function knows, so the
/// evaluator's dispatch and the validator's word rule can never disagree.
#[must_use]
pub fn is_builtin_function(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

/// Evaluates a postfix token sequence into a single value.
///
/// The sequence is consumed left to right against a value stack: numbers
/// are parsed and pushed, operators and functions pop their operands (for a
/// binary `a op b`, `b` comes off the stack first), compute, and push the
/// result. When the sequence is exhausted, exactly one value must remain —
/// that value is the result.
///
/// Arithmetic edge cases are not errors. Division by zero, modulo by zero,
/// the square root of a negative number, and the logarithm of a
/// non-positive number all produce NaN, and NaN propagates through every
/// subsequent operation to emerge as the final value.
///
/// # Precondition
/// `rpn` came out of [`crate::interpreter::converter::to_postfix`] applied
/// to a validated sequence.
///
/// # Parameters
/// - `rpn`: The postfix token sequence.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// An [`EvalError`] if the sequence violates the postfix invariants — an
/// operand missing, a parenthesis present, or a value count other than one
/// at the end. None of these can be produced through [`crate::evaluate`].
///
/// # Example
/// ```
/// use infixa::interpreter::{converter::to_postfix, evaluator::evaluate_postfix,
///                           lexer::tokenize, validator::validate};
///
/// let tokens = tokenize("2^-3").unwrap();
/// validate(&tokens).unwrap();
///
/// let value = evaluate_postfix(&to_postfix(&tokens)).unwrap();
/// assert_eq!(value, 0.125);
/// ```
pub fn evaluate_postfix(rpn: &[(Token, usize)]) -> EvalResult<f64> {
    let mut values: Vec<f64> = Vec::new();

    for (token, column) in rpn {
        match token {
            Token::Number(lexeme) => {
                let value =
                    lexeme.parse()
                          .map_err(|_| EvalError::InvalidNumber { lexeme: lexeme.clone(),
                                                                  column: *column, })?;
                values.push(value);
            },

            operator => match operator.arity() {
                1 => {
                    let x = pop_value(&mut values, operator, *column)?;

                    let result = if let Token::Word(name) = operator {
                        apply_function(name, x).ok_or_else(|| {
                            EvalError::UnexpectedToken { token:  operator.to_string(),
                                                         column: *column, }
                        })?
                    } else {
                        -x
                    };
                    values.push(result);
                },

                2 => {
                    let right = pop_value(&mut values, operator, *column)?;
                    let left = pop_value(&mut values, operator, *column)?;

                    values.push(apply_binary(operator, left, right));
                },

                _ => {
                    return Err(EvalError::UnexpectedToken { token:  operator.to_string(),
                                                            column: *column, });
                },
            },
        }
    }

    match values.as_slice() {
        [result] => Ok(*result),
        _ => Err(EvalError::UnbalancedValueStack { remaining: values.len() }),
    }
}

fn pop_value(values: &mut Vec<f64>, operator: &Token, column: usize) -> EvalResult<f64> {
    values.pop()
          .ok_or_else(|| EvalError::MissingOperand { operator: operator.to_string(),
                                                     column })
}

/// Applies a binary operator.
///
/// `/` and `%` check their divisor and produce NaN instead of an infinity
/// or a panic; everything else is plain IEEE arithmetic.
fn apply_binary(operator: &Token, left: f64, right: f64) -> f64 {
    match operator {
        Token::Plus => left + right,
        Token::Minus => left - right,
        Token::Star => left * right,
        Token::Caret => left.powf(right),
        Token::Slash => {
            if right == 0.0 {
                f64::NAN
            } else {
                left / right
            }
        },
        Token::Percent => modulo(left, right),
        _ => unreachable!("token with arity 2 that is not a binary operator"),
    }
}

/// Integer-truncating remainder.
///
/// Both operands are truncated toward zero before the remainder is taken,
/// so `5.9 % 2` behaves as `5 % 2`. A NaN operand stays NaN (truncation
/// would otherwise turn it into 0), and a divisor that is zero — before or
/// after truncation — yields NaN.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn modulo(left: f64, right: f64) -> f64 {
    if left.is_nan() || right.is_nan() || right == 0.0 {
        return f64::NAN;
    }

    let (left, right) = (left.trunc() as i64, right.trunc() as i64);

    left.checked_rem(right).map_or(f64::NAN, |remainder| remainder as f64)
}

/// Applies a builtin function by name, or `None` for a name outside the
/// builtin table.
fn apply_function(name: &str, x: f64) -> Option<f64> {
    let value = match name {
        "sqrt" => {
            if x < 0.0 {
                f64::NAN
            } else {
                x.sqrt()
            }
        },
        "cbrt" => x.cbrt(),
        "abs" => x.abs(),
        "exp" => x.exp(),
        "ln" => {
            if x <= 0.0 {
                f64::NAN
            } else {
                x.ln()
            }
        },
        "log" => {
            if x <= 0.0 {
                f64::NAN
            } else {
                x.log10()
            }
        },
        "sin" => x.sin(),
        "cos" => x.cos(),
        "tan" => x.tan(),
        _ => return None,
    };

    Some(value)
}
