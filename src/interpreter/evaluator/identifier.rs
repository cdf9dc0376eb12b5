use crate::{
    interpreter::{
        evaluator::core::{EvalResult, evaluate_numeric},
        lexer::Token,
        value::core::{Evaluation, Number},
    },
    util::num::letter_ordinal,
};

/// Replaces every identifier with its alphabetical ordinal.
///
/// Letters map case-insensitively to `a = 1` through `z = 26`. Every other
/// token is left unchanged.
///
/// # Example
/// ```
/// use exparse::interpreter::{
///     evaluator::identifier::map_identifiers,
///     lexer::{Token, tokenize},
/// };
///
/// let mapped = map_identifiers(&tokenize("(B)"));
/// assert_eq!(mapped,
///            vec![Token::LeftParen, Token::Number("2".to_string()), Token::RightParen]);
/// ```
#[must_use]
pub fn map_identifiers(tokens: &[Token]) -> Vec<Token> {
    tokens.iter()
          .map(|token| match token {
              Token::Identifier(letter) => letter_ordinal(*letter).map_or_else(
                  || token.clone(),
                  |ordinal| Token::Number(ordinal.to_string()),
              ),
              other => other.clone(),
          })
          .collect()
}

/// Evaluates an expression whose identifiers stand for their ordinals.
///
/// `a + b` is folded as `1 + 2`.
///
/// # Errors
/// Propagates any `RuntimeError` from [`evaluate_numeric`].
///
/// # Example
/// ```
/// use exparse::interpreter::{
///     evaluator::identifier::evaluate_identifier_mapped,
///     lexer::tokenize,
///     value::core::Number,
/// };
///
/// let result = evaluate_identifier_mapped(&tokenize("a + b * c")).unwrap();
/// assert_eq!(result, Number::Integer(7));
/// ```
pub fn evaluate_identifier_mapped(tokens: &[Token]) -> EvalResult<Number> {
    let mapped = map_identifiers(tokens);
    tracing::debug!(tokens = %render(&mapped), "mapped identifiers to ordinals");
    evaluate_numeric(&mapped)
}

/// Acknowledges an expression made only of identifiers.
///
/// No arithmetic is performed.
#[must_use]
pub const fn evaluate_pure_identifier(_tokens: &[Token]) -> Evaluation {
    Evaluation::Acknowledged
}

fn render(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
