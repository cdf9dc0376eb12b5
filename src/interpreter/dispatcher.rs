use crate::{
    error::{ExpressionError, RuntimeError},
    interpreter::{
        evaluator::{
            core::evaluate_numeric,
            identifier::{evaluate_identifier_mapped, evaluate_pure_identifier},
        },
        lexer::{Token, tokenize},
        validator::validate,
        value::core::Evaluation,
    },
};

/// The evaluation path an expression takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    /// Starts with an integer literal. Folded as plain arithmetic.
    Numeric,
    /// Made only of identifiers. Acknowledged without arithmetic.
    PureIdentifier,
    /// Anything else, such as `a + b` or `(2 + 3) * 4`. Identifiers are
    /// replaced by their ordinals before folding.
    IdentifierMapped,
}

/// Decides which evaluation path a token stream takes.
///
/// # Example
/// ```
/// use exparse::interpreter::{
///     dispatcher::{ExpressionKind, classify},
///     lexer::tokenize,
/// };
///
/// assert_eq!(classify(&tokenize("2 + 3")), ExpressionKind::Numeric);
/// assert_eq!(classify(&tokenize("a b")), ExpressionKind::PureIdentifier);
/// assert_eq!(classify(&tokenize("a + b")), ExpressionKind::IdentifierMapped);
/// assert_eq!(classify(&tokenize("(2 + 3)")), ExpressionKind::IdentifierMapped);
/// ```
#[must_use]
pub fn classify(tokens: &[Token]) -> ExpressionKind {
    match tokens.first() {
        Some(first) if first.is_integer_literal() => ExpressionKind::Numeric,
        Some(first) if first.is_identifier() && tokens.iter().all(Token::is_identifier) => {
            ExpressionKind::PureIdentifier
        },
        _ => ExpressionKind::IdentifierMapped,
    }
}

/// Tokenizes, validates, classifies and evaluates one expression.
///
/// Validation always runs the numeric rule and then the identifier rule,
/// whatever the expression's kind, and stops at the first failure.
///
/// # Errors
/// - `ExpressionError::Validation` if a rule rejects the expression.
/// - `ExpressionError::Runtime` if the input is empty or evaluation faults.
pub fn dispatch(source: &str) -> Result<Evaluation, ExpressionError> {
    let tokens = tokenize(source);
    if tokens.is_empty() {
        return Err(RuntimeError::EmptyExpression.into());
    }

    validate(&tokens)?;

    let kind = classify(&tokens);
    tracing::debug!(?kind, tokens = tokens.len(), "dispatching expression");

    let evaluation: Evaluation = match kind {
        ExpressionKind::Numeric => evaluate_numeric(&tokens)?.into(),
        ExpressionKind::PureIdentifier => evaluate_pure_identifier(&tokens),
        ExpressionKind::IdentifierMapped => evaluate_identifier_mapped(&tokens)?.into(),
    };

    tracing::debug!(%evaluation, "evaluated expression");
    Ok(evaluation)
}
