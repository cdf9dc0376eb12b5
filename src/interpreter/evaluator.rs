/// Core evaluation logic.
///
/// Contains the shunting-yard fold over numeric token streams, number
/// parsing, and the evaluator result type.
pub mod core;

/// Identifier evaluation paths.
///
/// Maps single-letter identifiers to their alphabetical ordinals before
/// folding, and acknowledges expressions made only of identifiers.
pub mod identifier;

/// Operators and their precedence table.
pub mod operator;

/// Scalar arithmetic.
///
/// Applies one operator to two numbers, with integer arithmetic where it is
/// exact and real arithmetic otherwise.
pub mod scalar;
