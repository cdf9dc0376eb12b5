use thiserror::Error;

/// Represents the structural problems detected before evaluation.
///
/// The messages are part of the public contract: the shell displays them
/// verbatim, prefixed with the rule that produced them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A `)` appeared with no open `(` to close.
    #[error("Invalid parenthesis")]
    InvalidParenthesis,
    /// At least one `(` was never closed.
    #[error("Parenthesis is missing")]
    MissingParenthesis,
    /// The expression starts or ends with an operator.
    #[error("Invalid expression")]
    OperatorAtEdge,
    /// The expression is a lone identifier with no operation.
    #[error("Invalid expression: Only one variable")]
    OnlyOneVariable,
}
