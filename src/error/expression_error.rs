use thiserror::Error;

use crate::{
    error::{RuntimeError, ValidationError},
    interpreter::validator::Rule,
};

/// The failure returned by [`crate::evaluate`].
///
/// Validation failures are descriptive sentences meant to be shown to the
/// user. Runtime faults are computation failures the caller may prefer to
/// report generically; see [`ExpressionError::is_fault`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    /// A validation rule rejected the token stream.
    #[error("{rule} Validation Error: {error}")]
    Validation {
        /// The rule that produced the failure.
        rule:  Rule,
        /// What the rule found.
        error: ValidationError,
    },
    /// Evaluation failed after validation succeeded.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl ExpressionError {
    /// Returns `true` for runtime faults and `false` for validation failures.
    ///
    /// # Example
    /// ```
    /// use exparse::evaluate;
    ///
    /// assert!(!evaluate("(1 + 2").unwrap_err().is_fault());
    /// assert!(evaluate("1 / 0").unwrap_err().is_fault());
    /// ```
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(self, Self::Runtime(_))
    }
}
