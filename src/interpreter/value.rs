/// Numeric values and evaluation outcomes.
///
/// Defines `Number`, which keeps integral results as integers, and
/// `Evaluation`, the successful result of the entry point.
pub mod core;
