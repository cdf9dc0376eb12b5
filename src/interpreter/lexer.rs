use std::fmt;

use logos::Logos;

use crate::interpreter::evaluator::operator::Operator;

/// Represents a lexical token in the source input.
///
/// Every token is produced once by [`tokenize`] and carries its kind
/// explicitly, so later phases match on the variant instead of re-inspecting
/// characters.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"\s+")]
pub enum Token {
    /// A run of digits and decimal points, such as `42`, `2.5` or `.5`.
    ///
    /// The lexeme is kept verbatim. Malformed runs such as `1.2.3` are still a
    /// single token and are rejected when the evaluator parses them.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_owned())]
    Number(String),
    /// One of the four arithmetic operators.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// A single ASCII letter. Two adjacent letters are two identifiers.
    #[regex(r"[a-zA-Z]", |lex| lex.slice().chars().next())]
    Identifier(char),
    /// Any other non-whitespace character, such as `%` or `=`.
    Symbol(char),
}

impl Token {
    /// Returns `true` if the token is an arithmetic operator.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Returns `true` if the token is a single-letter identifier.
    #[must_use]
    pub const fn is_identifier(&self) -> bool {
        matches!(self, Self::Identifier(_))
    }

    /// Returns `true` if the token is a number made only of ASCII digits.
    ///
    /// # Example
    /// ```
    /// use exparse::interpreter::lexer::Token;
    ///
    /// assert!(Token::Number("42".to_string()).is_integer_literal());
    /// assert!(!Token::Number("4.2".to_string()).is_integer_literal());
    /// ```
    #[must_use]
    pub fn is_integer_literal(&self) -> bool {
        match self {
            Self::Number(lexeme) => lexeme.bytes().all(|b| b.is_ascii_digit()),
            _ => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(lexeme) => write!(f, "{lexeme}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Identifier(c) | Self::Symbol(c) => write!(f, "{c}"),
        }
    }
}

/// Converts raw text into an ordered token stream.
///
/// Scans left to right. Digits and `.` accumulate into one number, whitespace
/// separates tokens and is dropped, and every other character becomes its own
/// token. Tokenizing never fails: characters the lexer does not recognize are
/// emitted as [`Token::Symbol`] and left for the evaluator to reject.
///
/// # Example
/// ```
/// use exparse::interpreter::{
///     evaluator::operator::Operator,
///     lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("12+(ab)");
/// assert_eq!(tokens,
///            vec![Token::Number("12".to_string()),
///                 Token::Operator(Operator::Add),
///                 Token::LeftParen,
///                 Token::Identifier('a'),
///                 Token::Identifier('b'),
///                 Token::RightParen]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => tokens.extend(lexer.slice()
                                          .chars()
                                          .filter(|c| !c.is_whitespace())
                                          .map(Token::Symbol)),
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized expression");
    tokens
}
