use std::fmt;

/// The pipeline phase an [`ErrorCode`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Lexing source text into tokens (1xxx).
    Tokenizer,
    /// Building the syntax tree (2xxx).
    Parser,
    /// Algebraic simplification (3xxx).
    Optimizer,
    /// Numeric evaluation (4xxx).
    Evaluator,
    /// Symbolic differentiation (5xxx).
    Derivator,
}

/// Represents every failure the engine can report.
///
/// The discriminant is the stable numeric code shown to users; the thousands
/// digit identifies the [`Phase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    /// The input produced no tokens at all.
    EmptyInput = 1001,
    /// A numeric literal contains a second decimal point.
    MultipleDecimalDot = 1002,

    /// Parsing failed for an unknown reason.
    ParserGeneralError = 2001,
    /// Tokens were left over after a complete expression.
    PartialParse = 2002,
    /// A token appeared where the grammar does not allow it.
    UnexpectedToken = 2003,
    /// The input ended before a `(` was closed.
    UnclosedParentheses = 2004,
    /// The left side of `=` is not a variable.
    NonVariableAssignment = 2005,

    /// A child node could not be optimized.
    FailedToOptimizeChild = 3001,

    /// An operand of a unary or binary operator failed to evaluate.
    FailedToEvaluateOperand = 4001,
    /// A variable has no value in the symbol table.
    UndefinedVariable = 4002,
    /// A function is not present in the registry.
    UndefinedFunction = 4003,
    /// A function argument or assigned value failed to evaluate.
    FailedToEvaluateArguments = 4004,
    /// A function was called with the wrong number of arguments.
    WrongArgumentCount = 4005,
    /// A function argument has an unsupported dimension.
    WrongArgumentType = 4006,
    /// A numeric literal could not be converted to a number.
    InvalidNumberLiteral = 4007,
    /// The divisor is zero.
    DivisionByZero = 4008,
    /// An internal invariant was violated.
    ReachedUnreachableCodePath = 4009,
    /// `+` or `-` applied to operands of different dimensions.
    InvalidBinaryOperation = 4010,
    /// `%` applied to operands of different dimensions.
    ExpectedSameUnit = 4011,
    /// The exponent is not a dimensionless integer.
    ScalarIntegerExpectedAsPower = 4012,
    /// A dimension power no longer fits in an `i32`.
    DimensionOverflow = 4013,

    /// Differentiation failed for an unsupported construct.
    DerivatorGeneralError = 5001,
    /// The function has no derivative (e.g. `round`).
    FunctionNotDerivable = 5002,
    /// The derivative needs a value that is only known at run time.
    CantBeDoneAtParseTime = 5003,
    /// A differentiated function has the wrong number of arguments.
    DerivatorWrongArgumentCount = 5004,
}

impl ErrorCode {
    /// Returns the numeric code.
    ///
    /// ## Example
    /// ```
    /// use symcalc::error::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::DivisionByZero.value(), 4008);
    /// ```
    #[must_use]
    pub const fn value(self) -> u16 {
        self as u16
    }

    /// Returns the phase whose band contains this code.
    #[must_use]
    pub const fn phase(self) -> Phase {
        match self.value() / 1000 {
            1 => Phase::Tokenizer,
            2 => Phase::Parser,
            3 => Phase::Optimizer,
            4 => Phase::Evaluator,
            _ => Phase::Derivator,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tokenizer => "tokenizer",
            Self::Parser => "parser",
            Self::Optimizer => "optimizer",
            Self::Evaluator => "evaluator",
            Self::Derivator => "derivator",
        };
        f.write_str(name)
    }
}
