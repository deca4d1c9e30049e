use crate::{
    ast::{BinaryOperator, Node},
    error::{Error, ErrorCode},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::quantity::Quantity,
    },
    location::Location,
};

impl Evaluator<'_> {
    /// Evaluates a binary operation.
    ///
    /// Both operands are evaluated, even when the left one already failed.
    /// Dimension errors raised by the arithmetic itself (mismatched units,
    /// division by zero, invalid powers) are attributed to the right operand.
    ///
    /// # Errors
    /// - `FailedToEvaluateOperand` at the operation when an operand fails.
    /// - `InvalidBinaryOperation`, `ExpectedSameUnit`, `DivisionByZero`,
    ///   `ScalarIntegerExpectedAsPower`, `DimensionOverflow` from
    ///   [`apply_binary`].
    pub(crate) fn eval_binary_op(&mut self,
                                 op: BinaryOperator,
                                 left: &Node,
                                 right: &Node,
                                 location: Location)
                                 -> EvalResult<Quantity> {
        let lhs = self.eval(left);
        let rhs = self.eval(right);

        let (lhs, rhs) = match (lhs, rhs) {
            (Ok(lhs), Ok(rhs)) => (lhs, rhs),
            (Err(e), _) | (_, Err(e)) => {
                return Err(Error::wrapping(ErrorCode::FailedToEvaluateOperand,
                                           location,
                                           format!("failed to evaluate operand of '{op}'"),
                                           e));
            },
        };

        let offending = if right.location().is_synthetic() { location } else { right.location() };
        apply_binary(op, lhs, rhs).map_err(|e| e.at(offending))
    }
}

/// Applies a binary operator to two evaluated operands.
///
/// - `+`, `-`, `%` require identical dimensions.
/// - `*`, `/` add and subtract dimension powers.
/// - `^` requires a dimensionless integer exponent.
///
/// Errors carry no location; the caller decides where they point.
///
/// # Example
/// ```
/// use symcalc::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::apply_binary, value::quantity::Quantity},
/// };
///
/// let q = apply_binary(BinaryOperator::Div, Quantity::length(6.0), Quantity::length(2.0)).unwrap();
/// assert_eq!(q, Quantity::scalar(3.0));
/// ```
pub fn apply_binary(op: BinaryOperator, lhs: Quantity, rhs: Quantity) -> EvalResult<Quantity> {
    match op {
        BinaryOperator::Add => lhs.add(rhs),
        BinaryOperator::Sub => lhs.subtract(rhs),
        BinaryOperator::Mul => lhs.multiply(rhs),
        BinaryOperator::Div => lhs.divide(rhs),
        BinaryOperator::Mod => lhs.modulo(rhs),
        BinaryOperator::Pow => lhs.power(rhs),
    }
}
