/// Validation errors.
///
/// Defines the structural problems found by the validator before any
/// arithmetic happens: unbalanced parentheses, operators at the edges of the
/// expression, and lone identifiers.
pub mod validation_error;
/// Runtime errors.
///
/// Contains all faults that can be raised while folding an expression, such
/// as division by zero, malformed number literals, or tokens the evaluator
/// cannot handle.
pub mod runtime_error;
/// The top-level error returned by the entry point.
///
/// Wraps either a validation failure tagged with its rule, or a runtime fault.
pub mod expression_error;

pub use expression_error::ExpressionError;
pub use runtime_error::RuntimeError;
pub use validation_error::ValidationError;
