/// Turns raw expression text into tokens.
///
/// This module declares the [`lexer::Token`] enum — the single classified
/// representation every later stage works with — and the tokenization pass
/// that inserts the `*` tokens implied by juxtaposition (`2(3)`,
/// `2sqrt(9)`) and normalizes leading-dot numbers.
///
/// # Responsibilities
/// - Defines the token kinds with their precedence, associativity, and
///   arity.
/// - Splits raw text into column-tagged tokens without judging grammar.
/// - Synthesizes implicit multiplication from raw character adjacency.
pub mod lexer;

/// Checks token sequences for grammatical well-formedness.
///
/// A single pass over the tokens enforcing the expression grammar: number
/// shape, function call shape, parenthesis balance, and operator position,
/// with the unary/binary classification of `-` shared with the converter.
///
/// # Responsibilities
/// - Rejects malformed sequences with a column-tagged [`crate::error::SyntaxError`].
/// - Guarantees the invariants the converter and evaluator rely on.
pub mod validator;

/// Reorders validated infix token sequences into postfix.
///
/// An implementation of Dijkstra's shunting-yard over an operator stack and
/// an output queue, extended with function calls and the synthetic unary
/// minus.
///
/// # Responsibilities
/// - Resolves precedence and associativity into postfix token order.
/// - Promotes `-` to the unary minus where the shared rule says so.
/// - Releases function tokens after their parenthesized argument.
pub mod converter;

/// Computes the numeric value of postfix sequences.
///
/// A left-to-right walk over the postfix tokens against a value stack,
/// hosting the builtin function table and the arithmetic edge-case rules
/// (NaN for division and modulo by zero and for out-of-domain function
/// arguments).
///
/// # Responsibilities
/// - Parses number lexemes and applies operators and functions.
/// - Preserves the integer-truncating behavior of `%`.
/// - Reports invariant violations instead of guessing a result.
pub mod evaluator;
