/// The function registry and call dispatch.
///
/// Holds [`core::FunctionRegistry`], the static table of built-in functions
/// and the evaluation of [`crate::ast::Node::FunctionCall`].
pub mod core;

/// Trigonometric, rounding and sign functions.
///
/// Trigonometric functions take a dimensionless number or an angle; rounding
/// functions keep the unit of their argument.
pub mod builtin;

/// Logarithm function implementations.
///
/// Natural, base-2, base-10 and arbitrary-base logarithms of dimensionless
/// numbers.
pub mod log;
