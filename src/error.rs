/// Syntax errors.
///
/// Defines all error types that can occur while tokenizing an expression or
/// checking its grammatical well-formedness. Syntax errors include unknown
/// symbols, malformed number literals, misplaced operators, and unbalanced
/// parentheses — everything detected before conversion or evaluation is
/// attempted.
pub mod syntax_error;

/// Evaluation errors.
///
/// Contains the error types that can be raised while evaluating a postfix
/// sequence. These are internal-invariant violations: a well-formed
/// expression that went through validation and conversion can never trigger
/// them. Arithmetic edge cases such as division by zero are not errors at
/// all; they surface as NaN results instead.
pub mod eval_error;

pub use eval_error::EvalError;
pub use syntax_error::SyntaxError;

#[derive(Debug)]
/// The union of both error channels of the evaluation pipeline.
///
/// The two channels stay separate so callers can tell a user mistake from a
/// broken postfix sequence: `Syntax` is reported for malformed input text,
/// `Eval` only for token sequences that bypassed validation.
pub enum Error {
    /// The expression text is grammatically malformed.
    Syntax(SyntaxError),
    /// A postfix sequence violated an evaluator invariant.
    Eval(EvalError),
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => e.fmt(f),
            Self::Eval(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
