use std::fmt;

use crate::{
    error::{ExpressionError, ValidationError},
    interpreter::lexer::Token,
};

/// A validation rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Balanced parentheses, and no operator at either edge.
    Numeric,
    /// Balanced parentheses, and not a lone identifier.
    Identifier,
}

/// The order the rules run in. The first failure wins.
///
/// Both rules run for every expression, whatever its kind.
pub const PIPELINE: [Rule; 2] = [Rule::Numeric, Rule::Identifier];

impl Rule {
    /// Checks a token stream against this rule.
    ///
    /// # Errors
    /// Returns the first `ValidationError` the rule finds. The parenthesis
    /// scan comes before the rule-specific check.
    ///
    /// # Example
    /// ```
    /// use exparse::{
    ///     error::ValidationError,
    ///     interpreter::{lexer::tokenize, validator::Rule},
    /// };
    ///
    /// assert_eq!(Rule::Numeric.check(&tokenize("2+")), Err(ValidationError::OperatorAtEdge));
    /// assert_eq!(Rule::Identifier.check(&tokenize("2+")), Ok(()));
    /// ```
    pub fn check(self, tokens: &[Token]) -> Result<(), ValidationError> {
        check_parentheses(tokens)?;

        match self {
            Self::Numeric => {
                let at_edge = tokens.first().is_some_and(Token::is_operator)
                              || tokens.last().is_some_and(Token::is_operator);
                if at_edge {
                    return Err(ValidationError::OperatorAtEdge);
                }
            },
            Self::Identifier => {
                if let [only] = tokens
                   && only.is_identifier()
                {
                    return Err(ValidationError::OnlyOneVariable);
                }
            },
        }

        Ok(())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric => write!(f, "Numeric"),
            Self::Identifier => write!(f, "Alphabetic"),
        }
    }
}

/// Checks that every `)` closes an earlier `(` and that no `(` is left open.
///
/// # Errors
/// - `ValidationError::InvalidParenthesis` for a `)` with nothing to close.
/// - `ValidationError::MissingParenthesis` if a `(` is never closed.
///
/// # Example
/// ```
/// use exparse::{
///     error::ValidationError,
///     interpreter::{lexer::tokenize, validator::check_parentheses},
/// };
///
/// assert_eq!(check_parentheses(&tokenize("(1 + (2))")), Ok(()));
/// assert_eq!(check_parentheses(&tokenize("1)")), Err(ValidationError::InvalidParenthesis));
/// assert_eq!(check_parentheses(&tokenize("((1)")), Err(ValidationError::MissingParenthesis));
/// ```
pub fn check_parentheses(tokens: &[Token]) -> Result<(), ValidationError> {
    let mut stack = Vec::new();

    for token in tokens {
        match token {
            Token::LeftParen => stack.push(token),
            Token::RightParen => {
                if stack.pop().is_none() {
                    return Err(ValidationError::InvalidParenthesis);
                }
            },
            _ => {},
        }
    }

    if stack.is_empty() { Ok(()) } else { Err(ValidationError::MissingParenthesis) }
}

/// Runs every rule in [`PIPELINE`] and returns the first failure.
///
/// # Errors
/// Returns `ExpressionError::Validation` tagged with the failing rule.
pub fn validate(tokens: &[Token]) -> Result<(), ExpressionError> {
    for rule in PIPELINE {
        rule.check(tokens)
            .map_err(|error| ExpressionError::Validation { rule, error })?;
    }
    Ok(())
}
