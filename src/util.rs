/// Numeric conversion helpers.
///
/// This module provides functions for narrowing real results to integers
/// without losing information, widening integers for real arithmetic, and
/// mapping letters to their alphabetical ordinals.
pub mod num;
