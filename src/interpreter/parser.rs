/// Parser entry point and the assignment level.
///
/// Contains [`core::parse`], which requires the whole token list to be
/// consumed, and the lowest-precedence rule `assignment := term ("=" term)*`.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative precedence levels for `+ -`, `* / %` and
/// `^`.
pub mod binary;

/// Unary, unit-suffix and primary parsing.
///
/// Handles prefix signs, postfix unit suffixes, literals, variables, function
/// calls and parenthesized groups.
pub mod unary;

/// Shared parsing helpers.
///
/// Argument-list parsing and the construction of common parse errors.
pub mod utils;
