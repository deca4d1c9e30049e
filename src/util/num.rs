/// Returns `true` when `lhs` and `rhs` differ by at most machine epsilon.
///
/// ## Example
/// ```
/// use symcalc::util::num::is_near;
///
/// assert!(is_near(0.0, 0.0));
/// assert!(!is_near(0.0, 1e-3));
/// ```
#[must_use]
pub fn is_near(lhs: f64, rhs: f64) -> bool {
    (lhs - rhs).abs() <= f64::EPSILON
}

/// Returns `true` when `value` has no fractional part (within epsilon).
///
/// ## Example
/// ```
/// use symcalc::util::num::is_integer;
///
/// assert!(is_integer(3.0));
/// assert!(is_integer(-2.0));
/// assert!(!is_integer(2.5));
/// ```
#[must_use]
pub fn is_integer(value: f64) -> bool {
    value.is_finite() && value - value.floor() < f64::EPSILON
}

/// Converts an integral `f64` to `i32`, or `None` when it does not fit.
///
/// ## Example
/// ```
/// use symcalc::util::num::f64_to_i32_checked;
///
/// assert_eq!(f64_to_i32_checked(-3.0), Some(-3));
/// assert_eq!(f64_to_i32_checked(1e12), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i32_checked(value: f64) -> Option<i32> {
    let floored = value.floor();
    if floored < f64::from(i32::MIN) || floored > f64::from(i32::MAX) {
        return None;
    }
    Some(floored as i32)
}

/// Renders `value` in the canonical form used for numeric literals.
///
/// The shortest decimal that reads back as the same `f64` is used, negative
/// zero is written as `0`, and integral values carry no fractional part.
///
/// ## Example
/// ```
/// use symcalc::util::num::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(0.25), "0.25");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
