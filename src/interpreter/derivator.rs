/// Symbolic differentiation of expression trees.
///
/// Contains [`core::derive`] and the rules for every kind of node except
/// function calls.
pub mod core;

/// The table of derivatives of built-in functions.
pub mod rules;
