//! # infixa
//!
//! infixa is an infix math expression evaluator written in Rust.
//! It takes unspaced expressions such as `2sqrt(9)2` or `-2.2(.5+1.5)` and
//! computes their value, resolving implicit multiplication, operator
//! precedence, and unary minus through the shunting-yard algorithm and a
//! postfix evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{converter::to_postfix, evaluator::evaluate_postfix, lexer::tokenize,
                  validator::validate},
};

/// Provides the error types of both pipeline channels.
///
/// This module defines all errors that can be raised while tokenizing,
/// validating, or evaluating an expression. Grammar mistakes and evaluator
/// invariant violations are distinct types, combined only in the [`Error`]
/// union this crate's entry point returns.
///
/// # Responsibilities
/// - Defines [`error::SyntaxError`] for malformed expression text.
/// - Defines [`error::EvalError`] for broken postfix sequences.
/// - Attaches source columns and offending lexemes for user feedback.
pub mod error;

/// Orchestrates the text-to-value pipeline.
///
/// This module ties together the four pipeline stages — lexer, validator,
/// converter, evaluator — each living in its own submodule. The stages are
/// pure functions over token sequences; nothing persists between calls.
///
/// # Responsibilities
/// - Defines the token model shared by all stages.
/// - Provides tokenization, validation, infix-to-postfix conversion, and
///   postfix evaluation.
pub mod interpreter;

/// Evaluates an infix math expression and returns its value.
///
/// The expression runs through the whole pipeline: tokenization (with
/// implicit multiplication inserted), validation, conversion to postfix,
/// and evaluation. Each call is self-contained; evaluating the same text
/// twice yields the same outcome.
///
/// Arithmetic edge cases — division or modulo by zero, the square root of
/// a negative number, the logarithm of a non-positive number — are **not**
/// errors: they return `Ok(f64::NAN)`, and callers that care must check
/// [`f64::is_nan`] on the result.
///
/// # Parameters
/// - `expression`: The expression text, e.g. `"2+2*3"` or `"2sqrt(9)2"`.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// [`Error::Syntax`] if the text is grammatically malformed; the
/// conversion and evaluation stages are never reached in that case.
/// [`Error::Eval`] if evaluation uncovers an internal inconsistency —
/// possible for the rare token adjacency the grammar has no rule for, such
/// as `(2).5`.
///
/// # Examples
/// ```
/// assert_eq!(infixa::evaluate("2+2*3").unwrap(), 8.0);
/// assert_eq!(infixa::evaluate("-2.2(.5+1.5)").unwrap(), -4.4);
///
/// // Division by zero is not an error; it yields NaN.
/// assert!(infixa::evaluate("1/0").unwrap().is_nan());
///
/// // Malformed input is.
/// assert!(infixa::evaluate("(1+2").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, Error> {
    let tokens = tokenize(expression)?;
    validate(&tokens)?;

    let postfix = to_postfix(&tokens);

    Ok(evaluate_postfix(&postfix)?)
}
