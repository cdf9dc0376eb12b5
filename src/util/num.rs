/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Narrows an `f64` to an `i64` if and only if no information is lost.
///
/// The value must be finite, have no fractional part and lie within
/// `±MAX_SAFE_I64_INT`. Negative zero narrows to `0`.
///
/// # Parameters
/// - `value`: The floating-point value to narrow.
///
/// # Returns
/// - `Some(i64)`: The exact integer value.
/// - `None`: If the value is fractional, non-finite or too large.
///
/// # Example
/// ```
/// use exparse::util::num::{MAX_SAFE_I64_INT, f64_to_i64_exact};
///
/// assert_eq!(f64_to_i64_exact(2.0), Some(2));
/// assert_eq!(f64_to_i64_exact(2.5), None);
/// assert_eq!(f64_to_i64_exact(f64::INFINITY), None);
/// assert_eq!(f64_to_i64_exact(1e300), None);
/// assert_eq!(f64_to_i64_exact(MAX_SAFE_I64_INT as f64), Some(MAX_SAFE_I64_INT));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value.abs() > MAX_SAFE_I64_INT as f64 {
        return None;
    }
    Some(value as i64)
}

/// Widens an `i64` to an `f64`.
///
/// Integers beyond `±MAX_SAFE_I64_INT` round to the nearest representable
/// value, which is the behaviour wanted when integer arithmetic overflows into
/// real arithmetic.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Returns the 1-based alphabetical ordinal of an ASCII letter.
///
/// The mapping is case-insensitive: `a` and `A` map to `1`, `z` and `Z` to
/// `26`. Other characters have no ordinal.
///
/// # Example
/// ```
/// use exparse::util::num::letter_ordinal;
///
/// assert_eq!(letter_ordinal('a'), Some(1));
/// assert_eq!(letter_ordinal('Z'), Some(26));
/// assert_eq!(letter_ordinal('7'), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn letter_ordinal(letter: char) -> Option<u8> {
    if letter.is_ascii_alphabetic() {
        Some(letter.to_ascii_lowercase() as u8 - b'a' + 1)
    } else {
        None
    }
}
