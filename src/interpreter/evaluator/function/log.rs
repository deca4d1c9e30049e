use crate::{
    error::{Error, ErrorCode},
    interpreter::{
        evaluator::{core::EvalResult, function::core::check_arity},
        value::quantity::Quantity,
    },
    location::Location,
};

/// Ensures every argument is dimensionless.
fn expect_scalars(args: &[Quantity], signature: &str, location: Location) -> EvalResult<()> {
    if args.iter().all(Quantity::is_scalar) {
        return Ok(());
    }
    Err(Error::new(ErrorCode::WrongArgumentType,
                   location,
                   format!("function {signature} expects dimensionless arguments")))
}

/// Natural logarithm.
pub fn ln(args: &[Quantity], location: Location) -> EvalResult<Quantity> {
    check_arity(args, 1, "ln(x)", location)?;
    expect_scalars(args, "ln(x)", location)?;
    Ok(Quantity::scalar(args[0].value.ln()))
}

pub fn log2(args: &[Quantity], location: Location) -> EvalResult<Quantity> {
    check_arity(args, 1, "log2(x)", location)?;
    expect_scalars(args, "log2(x)", location)?;
    Ok(Quantity::scalar(args[0].value.log2()))
}

pub fn log10(args: &[Quantity], location: Location) -> EvalResult<Quantity> {
    check_arity(args, 1, "log10(x)", location)?;
    expect_scalars(args, "log10(x)", location)?;
    Ok(Quantity::scalar(args[0].value.log10()))
}

/// Computes the logarithm of a value with respect to a given base.
///
/// Accepts exactly two dimensionless arguments, `x` and `base`, and returns
/// `ln(x) / ln(base)`.
///
/// # Example
/// ```
/// use symcalc::{
///     interpreter::{evaluator::function::log::log, value::quantity::Quantity},
///     location::Location,
/// };
///
/// let r = log(&[Quantity::scalar(8.0), Quantity::scalar(2.0)], Location::SYNTHETIC).unwrap();
/// assert_eq!(r, Quantity::scalar(3.0));
/// ```
pub fn log(args: &[Quantity], location: Location) -> EvalResult<Quantity> {
    check_arity(args, 2, "log(x, base)", location)?;
    expect_scalars(args, "log(x, base)", location)?;
    Ok(Quantity::scalar(args[0].value.log(args[1].value)))
}
