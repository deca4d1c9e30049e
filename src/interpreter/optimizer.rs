/// Post-order traversal and constant folding.
///
/// Contains [`core::optimize`], the entry point of the optimizer.
pub mod core;

/// Algebraic identities applied to binary operations whose operands could not
/// be folded.
pub mod rules;
