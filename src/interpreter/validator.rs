use crate::{
    error::SyntaxError,
    interpreter::{
        evaluator::is_builtin_function,
        lexer::{Token, minus_is_unary},
    },
};

/// Checks a token sequence for grammatical well-formedness.
///
/// The sequence is walked once, tracking the open parentheses and the
/// previous token. Every rule must pass:
///
/// - a number has at most one decimal point and does not end in one;
/// - a word names a builtin function and is immediately followed by `(`;
/// - every `)` closes an earlier `(`, and every `(` is closed;
/// - a unary `-` (classified by [`minus_is_unary`]) is followed by a
///   number, `(`, or a function;
/// - a binary operator is preceded by a number or `)` and followed by a
///   number, `(`, a function, or a `-` beginning a unary chain;
/// - the sequence is not empty, and does not end in a binary operator.
///
/// Conversion assumes a sequence this function accepted; it must run to
/// completion before [`crate::interpreter::converter::to_postfix`] is
/// called.
///
/// # Parameters
/// - `tokens`: The token sequence produced by
///   [`crate::interpreter::lexer::tokenize`].
///
/// # Errors
/// The first rule violation, as a [`SyntaxError`] carrying the offending
/// lexeme and its source column.
///
/// # Example
/// ```
/// use infixa::interpreter::{lexer::tokenize, validator::validate};
///
/// let tokens = tokenize("2^-3").unwrap();
/// assert!(validate(&tokens).is_ok());
///
/// let tokens = tokenize("(1+2").unwrap();
/// assert!(validate(&tokens).is_err());
/// ```
pub fn validate(tokens: &[(Token, usize)]) -> Result<(), SyntaxError> {
    if tokens.is_empty() {
        return Err(SyntaxError::EmptyExpression);
    }

    let mut open_columns: Vec<usize> = Vec::new();
    let mut previous: Option<&Token> = None;

    for (i, (token, column)) in tokens.iter().enumerate() {
        let next = tokens.get(i + 1).map(|(next, _)| next);

        match token {
            Token::Number(lexeme) => {
                if lexeme.matches('.').count() > 1 || lexeme.ends_with('.') {
                    return Err(SyntaxError::MalformedNumber { lexeme: lexeme.clone(),
                                                              column: *column, });
                }
            },

            Token::Word(name) => {
                if !is_builtin_function(name) {
                    return Err(SyntaxError::UnknownFunction { name:   name.clone(),
                                                              column: *column, });
                }
                if next != Some(&Token::LParen) {
                    return Err(SyntaxError::MissingFunctionArgument { name:   name.clone(),
                                                                      column: *column, });
                }
            },

            Token::LParen => open_columns.push(*column),

            Token::RParen => {
                if open_columns.pop().is_none() {
                    return Err(SyntaxError::UnbalancedParenthesis { column: *column });
                }
            },

            operator if operator.is_binary_operator() => {
                if *operator == Token::Minus && minus_is_unary(previous) {
                    // Unary minus only comes before a number, `(`, or a function.
                    if !matches!(next, Some(Token::Number(_) | Token::LParen | Token::Word(_))) {
                        return Err(SyntaxError::MisplacedOperator { operator: operator.to_string(),
                                                                    column:   *column, });
                    }
                } else {
                    // Binary only comes after a number or `)`.
                    if !matches!(previous, Some(Token::Number(_) | Token::RParen)) {
                        return Err(SyntaxError::MisplacedOperator { operator: operator.to_string(),
                                                                    column:   *column, });
                    }
                    // Binary only comes before a number, `(`, a function, or a unary `-`.
                    if !matches!(next,
                                 Some(Token::Number(_)
                                      | Token::LParen
                                      | Token::Word(_)
                                      | Token::Minus))
                    {
                        return Err(SyntaxError::MisplacedOperator { operator: operator.to_string(),
                                                                    column:   *column, });
                    }
                }
            },

            // `UnaryMinus` and anything else the lexer cannot emit.
            other => {
                return Err(SyntaxError::UnknownSymbol { symbol: other.to_string(),
                                                        column: *column, });
            },
        }

        previous = Some(token);
    }

    if let Some(column) = open_columns.pop() {
        return Err(SyntaxError::UnbalancedParenthesis { column });
    }

    if let Some(operator) = previous.filter(|token| token.is_binary_operator()) {
        let column = tokens[tokens.len() - 1].1;
        return Err(SyntaxError::MisplacedOperator { operator: operator.to_string(),
                                                    column });
    }

    Ok(())
}
