use thiserror::Error;

use crate::interpreter::evaluator::operator::Operator;

/// Represents all faults that can occur while folding an expression.
///
/// None of these are recovered by the evaluator. They reach the caller as an
/// `Err` so the shell can decide how to present a failed computation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// The right operand of `/` was zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// A number token could not be parsed, such as `1.2.3` or a lone `.`.
    #[error("Malformed number '{lexeme}'.")]
    MalformedNumber {
        /// The offending lexeme.
        lexeme: String,
    },
    /// A token that the active evaluation path cannot fold.
    #[error("Unsupported token '{token}'.")]
    UnsupportedToken {
        /// The offending token as written in the source.
        token: String,
    },
    /// An operator had fewer than two operands available.
    #[error("Operator '{operator}' is missing an operand.")]
    MissingOperand {
        /// The operator being applied.
        operator: Operator,
    },
    /// Operands were left over with no operator between them, as in `2a`.
    #[error("Expected a single result but {count} operands remain.")]
    DanglingOperand {
        /// How many operands were left on the stack.
        count: usize,
    },
    /// The parentheses in an unvalidated token stream did not pair up.
    #[error("Unbalanced parenthesis.")]
    UnbalancedParenthesis,
    /// A computation produced an infinite or undefined value.
    #[error("Arithmetic overflow while computing the result.")]
    Overflow,
    /// The input contained no tokens.
    #[error("Expression is empty.")]
    EmptyExpression,
}
