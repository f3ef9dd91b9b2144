use std::collections::VecDeque;

use crate::interpreter::lexer::{Associativity, Token, minus_is_unary};

/// Converts a validated infix token sequence into postfix order.
///
/// This is Dijkstra's shunting-yard with two extensions: functions are
/// pushed on the operator stack and released when their closing parenthesis
/// is reached, and a `-` classified by [`minus_is_unary`] is promoted to
/// [`Token::UnaryMinus`] before precedence is resolved.
///
/// One left-to-right pass over the input:
///
/// - numbers go straight to the output queue;
/// - functions and `(` are pushed on the operator stack;
/// - an operator first pops every stacked operator that outranks it (higher
///   precedence, or equal precedence when the incoming operator is
///   left-associative), then is pushed itself;
/// - `)` pops the stack to the output until the matching `(`, discards the
///   `(`, and releases a function if one is now on top;
/// - at the end of input the remaining stack drains to the output.
///
/// The output never has more tokens than the input: every input token is
/// emitted at most once, parentheses are dropped, and the synthetic unary
/// minus replaces a `Minus` rather than adding to it.
///
/// # Precondition
/// `tokens` was accepted by [`crate::interpreter::validator::validate`].
/// The conversion of an unvalidated sequence is unspecified (though the
/// evaluator will still refuse its output rather than misread it).
///
/// # Parameters
/// - `tokens`: The validated infix token sequence.
///
/// # Returns
/// The same expression in postfix order, columns preserved.
///
/// # Example
/// ```
/// use infixa::interpreter::{converter::to_postfix, lexer::tokenize, validator::validate};
///
/// let tokens = tokenize("2+3*4").unwrap();
/// validate(&tokens).unwrap();
///
/// let postfix: Vec<String> = to_postfix(&tokens).iter()
///                                                .map(|(token, _)| token.to_string())
///                                                .collect();
/// assert_eq!(postfix.join(" "), "2 3 4 * +");
/// ```
#[must_use]
pub fn to_postfix(tokens: &[(Token, usize)]) -> Vec<(Token, usize)> {
    let mut operator_stack: Vec<(Token, usize)> = Vec::new();
    let mut output_queue: VecDeque<(Token, usize)> = VecDeque::new();
    let mut previous: Option<&Token> = None;

    for (token, column) in tokens {
        match token {
            Token::Number(_) => output_queue.push_back((token.clone(), *column)),

            Token::Word(_) | Token::LParen => operator_stack.push((token.clone(), *column)),

            Token::RParen => {
                // Pop to the output until the matching `(`, then drop it.
                while let Some(entry) = operator_stack.pop() {
                    if entry.0 == Token::LParen {
                        break;
                    }
                    output_queue.push_back(entry);
                }

                // A function on top belongs to this parenthesized argument.
                if matches!(operator_stack.last(), Some((Token::Word(_), _)))
                   && let Some(function) = operator_stack.pop()
                {
                    output_queue.push_back(function);
                }
            },

            _ => {
                let current = if *token == Token::Minus && minus_is_unary(previous) {
                    Token::UnaryMinus
                } else {
                    token.clone()
                };

                while let Some((top, _)) = operator_stack.last() {
                    let outranked = top.is_operator()
                                    && match current.associativity() {
                                        Associativity::Left => {
                                            current.precedence() <= top.precedence()
                                        },
                                        Associativity::Right => {
                                            current.precedence() < top.precedence()
                                        },
                                    };
                    if !outranked {
                        break;
                    }
                    if let Some(entry) = operator_stack.pop() {
                        output_queue.push_back(entry);
                    }
                }

                operator_stack.push((current, *column));
            },
        }

        previous = Some(token);
    }

    while let Some(entry) = operator_stack.pop() {
        output_queue.push_back(entry);
    }

    output_queue.into_iter().collect()
}
