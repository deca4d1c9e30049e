/// Floating-point helpers.
///
/// Tolerance comparisons, integrality checks and the canonical textual form
/// used when the optimizer re-renders numeric literals.
///
/// # Responsibilities
/// - Compare floats against machine epsilon.
/// - Convert integral floats to dimension powers without silent wrap-around.
/// - Render numbers in a short, re-parseable form.
pub mod num;
