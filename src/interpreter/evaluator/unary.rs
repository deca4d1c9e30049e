use crate::{
    ast::{Node, UnaryOperator},
    error::{Error, ErrorCode},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::quantity::Quantity,
    },
    location::Location,
};

impl Evaluator<'_> {
    /// Evaluates a unary operation.
    ///
    /// - `Plus`: the operand unchanged.
    /// - `Negate`: the negated value, dimension kept.
    ///
    /// # Errors
    /// `FailedToEvaluateOperand` at the operation, wrapping the operand's
    /// failure.
    pub(crate) fn eval_unary_op(&mut self,
                                op: UnaryOperator,
                                operand: &Node,
                                location: Location)
                                -> EvalResult<Quantity> {
        let value = self.eval(operand).map_err(|e| {
                                          Error::wrapping(ErrorCode::FailedToEvaluateOperand,
                                                          location,
                                                          format!("failed to evaluate operand of \
                                                                   unary '{op}'"),
                                                          e)
                                      })?;

        Ok(apply_unary(op, value))
    }
}

/// Applies a unary operator to an evaluated operand.
#[must_use]
pub fn apply_unary(op: UnaryOperator, value: Quantity) -> Quantity {
    match op {
        UnaryOperator::Plus => value.identity(),
        UnaryOperator::Negate => value.negate(),
    }
}
