use thiserror::Error as ThisError;

use crate::{error::code::ErrorCode, location::Location};

/// Result type returned by every fallible operation of the engine.
pub type Result<T> = std::result::Result<T, Error>;

/// A located failure.
///
/// `location` points at the part of the source the failure refers to, or is
/// [`Location::SYNTHETIC`] when the failing node was produced by a rewrite.
/// Errors that report a failed sub-step (`FailedToEvaluateOperand`,
/// `FailedToEvaluateArguments`, `FailedToOptimizeChild`) keep the inner error
/// as their `cause`.
#[derive(Debug, Clone, PartialEq, ThisError)]
#[error("{description}")]
pub struct Error {
    /// What went wrong.
    pub code:        ErrorCode,
    /// Where it went wrong.
    pub location:    Location,
    /// Human readable message.
    pub description: String,
    /// The error this one wraps, if any.
    #[source]
    pub cause:       Option<Box<Error>>,
}

impl Error {
    /// Creates an error without a cause.
    ///
    /// ## Example
    /// ```
    /// use symcalc::{
    ///     error::{Error, ErrorCode},
    ///     location::Location,
    /// };
    ///
    /// let error = Error::new(ErrorCode::UndefinedVariable,
    ///                        Location::new(1, 2),
    ///                        "undefined variable 'y'");
    /// assert_eq!(error.to_string(), "undefined variable 'y'");
    /// ```
    pub fn new(code: ErrorCode, location: Location, description: impl Into<String>) -> Self {
        Self { code,
               location,
               description: description.into(),
               cause: None }
    }

    /// Creates an error that wraps `cause`.
    pub fn wrapping(code: ErrorCode,
                    location: Location,
                    description: impl Into<String>,
                    cause: Self)
                    -> Self {
        Self { code,
               location,
               description: description.into(),
               cause: Some(Box::new(cause)) }
    }

    /// Returns the same error pointing at `location`.
    ///
    /// Used when an error raised without source context (for example by
    /// quantity arithmetic) is attributed to the operand that caused it.
    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Follows the `cause` chain to the innermost error.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Some(cause) = &current.cause {
            current = cause;
        }
        current
    }
}
