#[derive(Debug)]
/// Represents invariant violations inside the postfix evaluator.
///
/// None of these can be reached through [`crate::evaluate`]: the validator
/// rejects every expression that would trigger them before conversion is
/// attempted. They exist so that a postfix sequence built by hand — or a
/// bug in the pipeline itself — produces a diagnosable error instead of a
/// silently wrong number.
pub enum EvalError {
    /// An operator or function found too few values on the stack.
    MissingOperand {
        /// The operator or function that was being applied.
        operator: String,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// A number lexeme could not be parsed as a floating-point value.
    InvalidNumber {
        /// The offending number lexeme.
        lexeme: String,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A token with no evaluation rule reached the postfix sequence.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Evaluation consumed the whole sequence but did not end with exactly
    /// one value on the stack.
    UnbalancedValueStack {
        /// How many values were left.
        remaining: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperand { operator, column } => write!(f,
                                                                "Evaluation error at column {column}: Operator '{operator}' is missing an operand."),

            Self::InvalidNumber { lexeme, column } => {
                write!(f, "Evaluation error at column {column}: Invalid number '{lexeme}'.")
            },

            Self::UnexpectedToken { token, column } => {
                write!(f, "Evaluation error at column {column}: Unexpected token '{token}'.")
            },

            Self::UnbalancedValueStack { remaining } => write!(f,
                                                               "Evaluation error: Finished with {remaining} values on the stack, expected exactly one."),
        }
    }
}

impl std::error::Error for EvalError {}
