/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: f64 = 9_007_199_254_740_991.0;

/// Converts an `f64` to `i64` if and only if the conversion is exact.
///
/// The value must be finite, integral and within `±MAX_SAFE_INT`. Used to
/// print integral numbers without a fractional part.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
///
/// ## Returns
/// - `Some(i64)`: The integral value.
/// - `None`: If the value is fractional, non-finite or too large.
///
/// ## Example
/// ```
/// use normal::util::num::{MAX_SAFE_INT, f64_to_i64_exact};
///
/// assert_eq!(f64_to_i64_exact(42.0), Some(42));
/// assert_eq!(f64_to_i64_exact(-3.0), Some(-3));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(f64::INFINITY), None);
/// assert_eq!(f64_to_i64_exact(MAX_SAFE_INT * 2.0), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.abs() > MAX_SAFE_INT || value.fract() != 0.0 {
        return None;
    }
    Some(value as i64)
}

/// Counts the decimal points in a numeric literal.
///
/// ## Example
/// ```
/// use normal::util::num::count_dots;
///
/// assert_eq!(count_dots("12"), 0);
/// assert_eq!(count_dots("1.2.3"), 2);
/// ```
#[must_use]
pub fn count_dots(literal: &str) -> usize {
    literal.bytes().filter(|&b| b == b'.').count()
}
