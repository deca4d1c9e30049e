/// Error codes.
///
/// Defines the closed set of failure codes, partitioned into numeric bands by
/// the pipeline phase that raises them (tokenizer, parser, optimizer,
/// evaluator, derivator).
pub mod code;
/// The located error value.
///
/// Every failure in the crate is reported as an [`Error`] carrying its code,
/// the source span it refers to, a human readable description and, for
/// errors that wrap a failed sub-step, the underlying cause.
pub mod expr_error;

pub use code::{ErrorCode, Phase};
pub use expr_error::{Error, Result};
