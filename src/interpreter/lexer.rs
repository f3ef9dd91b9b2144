use logos::Logos;

use crate::error::SyntaxError;

/// Represents a lexical token of the expression grammar.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens, plus the synthetic unary minus
/// that only the converter produces.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// A maximal run of digits and decimal points, such as `3.14` or `0.5`.
    ///
    /// The lexeme is kept as text: malformed runs like `2..5` or `5.` must
    /// survive tokenization so the validator can reject them with a precise
    /// diagnostic. A run starting with `.` is stored with a `0` prefix
    /// (`.5` becomes `0.5`). The numeric value is parsed once, by the
    /// evaluator.
    #[regex(r"[0-9.]+", normalize_number)]
    Number(String),
    /// A maximal alphabetic run; a function name such as `sqrt`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Word(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// The synthetic unary minus, precedence 5, right-associative, arity 1.
    ///
    /// The lexer never emits it. The converter substitutes it for a `Minus`
    /// that [`minus_is_unary`] classifies as unary; a raw sequence that
    /// already contains it fails validation.
    UnaryMinus,
    /// Whitespace, skipped.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Whitespace,
}

/// The grouping direction of an operator when precedence ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// Repeated application groups left to right.
    Left,
    /// Repeated application groups right to left.
    Right,
}

impl Token {
    /// Tells whether the token is one of the six binary operators.
    #[must_use]
    pub const fn is_binary_operator(&self) -> bool {
        matches!(self,
                 Self::Plus | Self::Minus | Self::Star | Self::Slash | Self::Percent | Self::Caret)
    }

    /// Tells whether the token is an operator, the unary minus included.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        self.is_binary_operator() || matches!(self, Self::UnaryMinus)
    }

    /// Returns the binding strength of an operator token.
    ///
    /// Unary minus binds tightest (5), then `^` (4), then `* / %` (3), then
    /// `+ -` (2). Tokens that are not operators return 0.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::UnaryMinus => 5,
            Self::Caret => 4,
            Self::Star | Self::Slash | Self::Percent => 3,
            Self::Plus | Self::Minus => 2,
            _ => 0,
        }
    }

    /// Returns the associativity of an operator token.
    ///
    /// `^` and the unary minus are right-associative; every other operator
    /// is left-associative.
    #[must_use]
    pub const fn associativity(&self) -> Associativity {
        match self {
            Self::Caret | Self::UnaryMinus => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Returns the number of operands the token consumes: 1 for functions
    /// and the unary minus, 2 for binary operators, 0 for anything else.
    #[must_use]
    pub const fn arity(&self) -> u8 {
        match self {
            Self::Word(_) | Self::UnaryMinus => 1,
            Self::Plus | Self::Minus | Self::Star | Self::Slash | Self::Percent | Self::Caret => 2,
            _ => 0,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(lexeme) => write!(f, "{lexeme}"),
            Self::Word(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus | Self::UnaryMinus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Whitespace => write!(f, " "),
        }
    }
}

/// Tells whether a `-` token is the unary minus.
///
/// A `-` is unary iff it is the first token, or the previous token is a
/// binary operator, or the previous token is an opening parenthesis. The
/// validator and the converter both classify through this one function so
/// the rule cannot drift apart between them.
#[must_use]
pub fn minus_is_unary(previous: Option<&Token>) -> bool {
    match previous {
        None => true,
        Some(token) => token.is_binary_operator() || *token == Token::LParen,
    }
}

/// Tokenizes an expression into `(Token, column)` pairs.
///
/// The pass scans left to right and synthesizes the `*` tokens that
/// juxtaposition implies: one immediately before a `(` or a function name
/// whenever the last emitted character was a digit or `)`, and one before a
/// number starting with a digit whenever the last emitted character was
/// `)`. A number starting with `.` right after `)` does not multiply —
/// `(2).5` is left for the evaluator to reject.
///
/// No grammatical validation happens here: malformed numbers and unbalanced
/// parentheses are emitted as tokens and left to the validator.
///
/// # Parameters
/// - `expression`: The raw expression text, e.g. `"2sqrt(9)2"`.
///
/// # Returns
/// The token sequence, each token tagged with its 1-based source column.
///
/// # Errors
/// `SyntaxError::UnknownSymbol` if the text contains a character the
/// grammar does not know.
///
/// # Example
/// ```
/// use infixa::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2(3)").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            [Token::Number("2".into()),
///             Token::Star,
///             Token::LParen,
///             Token::Number("3".into()),
///             Token::RParen]);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<(Token, usize)>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut previous_char: Option<char> = None;

    let mut lexer = Token::lexer(expression);

    while let Some(item) = lexer.next() {
        let slice = lexer.slice();
        let column = lexer.span().start + 1;

        let Ok(token) = item else {
            return Err(SyntaxError::UnknownSymbol { symbol: slice.to_string(),
                                                    column });
        };

        let juxtaposed = match &token {
            Token::LParen | Token::Word(_) => {
                matches!(previous_char, Some(c) if c.is_ascii_digit() || c == ')')
            },
            Token::Number(_) => {
                previous_char == Some(')') && slice.starts_with(|c: char| c.is_ascii_digit())
            },
            _ => false,
        };
        if juxtaposed {
            tokens.push((Token::Star, column));
        }

        previous_char = slice.chars().last();
        tokens.push((token, column));
    }

    Ok(tokens)
}

/// Prefixes a leading decimal point with `0`, so `.5` lexes as `0.5`.
fn normalize_number(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();

    if slice.starts_with('.') {
        format!("0{slice}")
    } else {
        slice.to_owned()
    }
}
