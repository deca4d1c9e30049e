use crate::{
    error::{Error, ErrorCode},
    interpreter::{
        evaluator::{core::EvalResult, function::core::check_arity},
        value::quantity::Quantity,
    },
    location::Location,
    util::num::is_near,
};

/// Defines a trigonometric builtin.
///
/// The generated functions accept exactly one argument, which must be a
/// dimensionless number or an angle; both are taken as radians. The result is
/// dimensionless.
///
/// # Example
/// ```
/// use symcalc::{
///     interpreter::{evaluator::function::builtin::sin, value::quantity::Quantity},
///     location::Location,
/// };
///
/// let x = Quantity::angle(std::f64::consts::FRAC_PI_2);
/// let r = sin(&[x], Location::SYNTHETIC).unwrap();
///
/// assert_eq!(r, Quantity::scalar(1.0));
/// ```
macro_rules! trigonometric_builtin {
    ($fname:ident, $signature:literal, $body:expr) => {
        pub fn $fname(args: &[Quantity], location: Location) -> EvalResult<Quantity> {
            check_arity(args, 1, $signature, location)?;
            let x = args[0];
            if !x.is_scalar() && !x.is_angle() {
                return Err(Error::new(ErrorCode::WrongArgumentType,
                                      location,
                                      concat!("function ", $signature, " expects a number or an angle")));
            }
            let f: fn(f64) -> f64 = $body;
            Ok(Quantity::scalar(f(x.value)))
        }
    };
}

trigonometric_builtin!(sin, "sin(x)", f64::sin);
trigonometric_builtin!(cos, "cos(x)", f64::cos);
trigonometric_builtin!(tan, "tan(x)", f64::tan);
trigonometric_builtin!(ctg, "ctg(x)", |x| 1.0 / x.tan());
trigonometric_builtin!(sec, "sec(x)", |x| 1.0 / x.cos());
trigonometric_builtin!(csc, "csc(x)", |x| 1.0 / x.sin());

/// Applies a unit-preserving rounding function.
///
/// The value is rounded in base units (meters, radians), so
/// `round(1.6 km)` is `1600 m`.
fn keep_unit(args: &[Quantity],
             signature: &str,
             location: Location,
             f: fn(f64) -> f64)
             -> EvalResult<Quantity> {
    check_arity(args, 1, signature, location)?;
    Ok(Quantity::new(args[0].unit, f(args[0].value)))
}

pub fn round(args: &[Quantity], location: Location) -> EvalResult<Quantity> {
    keep_unit(args, "round(x)", location, f64::round)
}

pub fn floor(args: &[Quantity], location: Location) -> EvalResult<Quantity> {
    keep_unit(args, "floor(x)", location, f64::floor)
}

pub fn ceil(args: &[Quantity], location: Location) -> EvalResult<Quantity> {
    keep_unit(args, "ceil(x)", location, f64::ceil)
}

/// Absolute value; the unit is kept.
///
/// ## Example
/// ```
/// use symcalc::{
///     interpreter::{evaluator::function::builtin::abs, value::quantity::Quantity},
///     location::Location,
/// };
///
/// let r = abs(&[Quantity::length(-2.0)], Location::SYNTHETIC).unwrap();
/// assert_eq!(r, Quantity::length(2.0));
/// ```
pub fn abs(args: &[Quantity], location: Location) -> EvalResult<Quantity> {
    keep_unit(args, "abs(x)", location, f64::abs)
}

/// Sign of the argument as a dimensionless `-1`, `0` or `1`.
///
/// Values within machine epsilon of zero have sign `0`.
pub fn sgn(args: &[Quantity], location: Location) -> EvalResult<Quantity> {
    check_arity(args, 1, "sgn(x)", location)?;
    let value = args[0].value;
    let sign = if is_near(value, 0.0) { 0.0 } else { value.signum() };
    Ok(Quantity::scalar(sign))
}
