//! # symcalc
//!
//! symcalc is a symbolic expression engine written in Rust.
//! It tokenizes and parses arithmetic expressions with variables, function
//! calls and physical units, simplifies them, differentiates them with
//! respect to a variable and evaluates them with dimensional analysis.
//!
//! ```
//! use symcalc::{
//!     derive_str, evaluate_str,
//!     interpreter::evaluator::{core::SymbolTable, function::core::FunctionRegistry},
//! };
//!
//! let mut symbols = SymbolTable::with_constants();
//! let functions = FunctionRegistry::with_builtins();
//!
//! let width = evaluate_str("3 km + 500 m", &mut symbols, &functions).unwrap();
//! assert!(width.is_length());
//! assert_eq!(width.value, 3500.0);
//!
//! assert_eq!(derive_str("sin(x)", "x").unwrap().to_string(), "cos(x)");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Node,
    error::Result,
    interpreter::{
        derivator::core::derive,
        evaluator::{
            core::{SymbolTable, evaluate},
            function::core::FunctionRegistry,
        },
        lexer::tokenize,
        optimizer::core::optimize,
        parser::core::parse,
        value::quantity::Quantity,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` enum and the operator enums that represent
/// an expression as an owned tree. The tree is built by the parser, rewritten
/// by the optimizer and the derivator, and walked by the evaluator.
///
/// # Responsibilities
/// - Defines one node variant per grammar construct.
/// - Attaches a source location to every node for error reporting.
/// - Provides structural equality, rendering back to source text and a
///   debugging dump.
pub mod ast;
/// Provides the unified error type of every phase.
///
/// Every failure, from tokenizing to differentiating, is reported as an
/// [`error::Error`] carrying a numeric [`error::ErrorCode`], the location of
/// the offending text and a description.
pub mod error;
/// The pipeline stages.
///
/// This module ties together lexing, parsing, optimizing, differentiating and
/// evaluating, together with the runtime value types they share.
pub mod interpreter;
/// Source spans.
pub mod location;
/// General utilities for numeric comparison and conversion.
///
/// Epsilon comparisons, integer checks and the canonical rendering of numbers
/// as literals, shared by the evaluator and the optimizer.
pub mod util;

/// Tokenizes and parses `source`.
///
/// # Errors
/// Any tokenizer or parser error.
pub fn parse_str(source: &str) -> Result<Node> {
    parse(&tokenize(source)?)
}

/// Parses and evaluates `source`.
///
/// Assignments in `source` are written to `symbols`.
///
/// # Errors
/// Any tokenizer, parser or evaluator error.
pub fn evaluate_str(source: &str,
                    symbols: &mut SymbolTable,
                    functions: &FunctionRegistry)
                    -> Result<Quantity> {
    evaluate(&parse_str(source)?, symbols, functions)
}

/// Parses and optimizes `source`.
///
/// # Examples
/// ```
/// use symcalc::optimize_str;
///
/// assert_eq!(optimize_str("x * 1 + 0").unwrap().to_string(), "x");
/// assert_eq!(optimize_str("2 km").unwrap().to_string(), "2000 m");
/// ```
pub fn optimize_str(source: &str) -> Result<Node> {
    optimize(parse_str(source)?)
}

/// Parses `source` and differentiates it with respect to `variable`.
pub fn derive_str(source: &str, variable: &str) -> Result<Node> {
    derive(&parse_str(source)?, variable)
}
