/// Core evaluation logic and the symbol table.
///
/// Contains the [`core::Evaluator`] dispatcher, the public [`core::evaluate`]
/// and [`core::evaluate_parse_time`] entry points, variable lookup,
/// assignment and unit application.
pub mod core;

/// Numeric literal conversion.
///
/// Turns binary, octal, hexadecimal, decimal and scientific literals into
/// scalar quantities.
pub mod literal;

/// Binary operator evaluation logic.
///
/// Evaluates both operands and applies the dimension-checked arithmetic of
/// the operator.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Function evaluation.
///
/// The function registry, the dispatch of calls to native implementations
/// and the default built-in functions.
pub mod function;
