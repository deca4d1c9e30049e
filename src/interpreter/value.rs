/// Physical dimensions.
///
/// Declares [`unit::MeasurementUnit`], the vector of integer length and angle
/// powers attached to every evaluated number, and the unit suffixes the
/// language accepts (`mm`, `cm`, `m`, `km`, `rad`, `deg`).
pub mod unit;

/// Dimensioned numbers.
///
/// Declares [`quantity::Quantity`] and the dimension-checked arithmetic the
/// evaluator applies for each operator.
///
/// # Responsibilities
/// - Combine dimensions for `*`, `/` and `^`.
/// - Reject `+`, `-` and `%` on mismatched dimensions.
/// - Detect division by zero and non-integer dimensioned powers.
pub mod quantity;
