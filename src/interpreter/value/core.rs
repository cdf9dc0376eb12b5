use std::fmt;

use crate::util::num::{f64_to_i64_exact, i64_to_f64};

/// The acknowledgement shown for an expression made only of identifiers.
pub const ACKNOWLEDGEMENT: &str = "Valid expression";

/// A numeric result or operand.
///
/// Values with no fractional part are kept as [`Number::Integer`] so they
/// display without a trailing `.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64 bit integer.
    Integer(i64),
    /// A double precision value with a fractional part, or one too large to
    /// hold exactly as an integer.
    Real(f64),
}

impl Number {
    /// Builds a number from a real value, collapsing it to an integer when
    /// that loses nothing.
    ///
    /// # Example
    /// ```
    /// use exparse::interpreter::value::core::Number;
    ///
    /// assert_eq!(Number::from_real(2.0), Number::Integer(2));
    /// assert_eq!(Number::from_real(2.5), Number::Real(2.5));
    /// ```
    #[must_use]
    pub fn from_real(value: f64) -> Self {
        f64_to_i64_exact(value).map_or(Self::Real(value), Self::Integer)
    }

    /// Returns the value as an `f64`.
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Real(r) => r,
        }
    }

    /// Returns `true` if the number is [`Number::Integer`].
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::from_real(v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}

/// The successful outcome of evaluating an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    /// The folded numeric result.
    Number(Number),
    /// The expression consisted only of identifiers and needs no arithmetic.
    Acknowledged,
}

impl Evaluation {
    /// Returns the numeric result, if there is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Acknowledged => None,
        }
    }
}

impl From<Number> for Evaluation {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Acknowledged => write!(f, "{ACKNOWLEDGEMENT}"),
        }
    }
}
