//! # exparse
//!
//! exparse is a small infix expression evaluator written in Rust.
//! It tokenizes a single line of digits, single-letter identifiers, the four
//! arithmetic operators and parentheses, validates its structure, and folds
//! it into a result with the shunting-yard algorithm.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for validation and evaluation.
///
/// This module defines every failure `evaluate` can report. Validation
/// failures carry the exact sentence shown to the user; runtime faults
/// describe computations that could not complete.
///
/// # Responsibilities
/// - Defines error enums for validation and runtime failures.
/// - Tags validation failures with the rule that produced them.
/// - Integrates with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation of a single expression.
///
/// This module ties together lexing, validation, evaluation, and value
/// representation.
///
/// # Responsibilities
/// - Coordinates the lexer, validator, evaluator, and dispatcher.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers.
///
/// Lossless conversion between integers and reals, and letter ordinals.
pub mod util;

pub use error::ExpressionError;
pub use interpreter::value::core::{Evaluation, Number};

/// Evaluates one line of text.
///
/// Each call is independent: no state is carried between calls, so
/// evaluating the same text twice gives the same result.
///
/// # Errors
/// Returns a validation error if the expression is structurally invalid, or
/// a runtime fault if it cannot be computed.
///
/// # Examples
/// ```
/// use exparse::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap().to_string(), "14");
/// assert_eq!(evaluate("10 / 4").unwrap().to_string(), "2.5");
/// assert_eq!(evaluate("a + b").unwrap().to_string(), "3");
///
/// let err = evaluate("(2 + 3").unwrap_err();
/// assert_eq!(err.to_string(), "Numeric Validation Error: Parenthesis is missing");
/// ```
pub fn evaluate(source: &str) -> Result<Evaluation, ExpressionError> {
    interpreter::dispatcher::dispatch(source)
}
