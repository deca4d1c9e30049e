use std::collections::HashMap;

use log::trace;

use crate::{
    ast::Node,
    error::{Error, ErrorCode, Result},
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            function::{builtin, log as logarithm},
        },
        value::quantity::Quantity,
    },
    location::Location,
};

/// Native implementation of a callable function.
///
/// Receives the evaluated arguments in order and the location of the call.
/// The implementation checks its own argument count and types and reports
/// problems as `WrongArgumentCount` or `WrongArgumentType` at that location.
pub type NativeFn = fn(&[Quantity], Location) -> Result<Quantity>;

/// A registered function: its implementation and a human readable signature
/// such as `log(x, base)`.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDefinition {
    pub implementation: NativeFn,
    pub signature:      &'static str,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the signature shown to users,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table used to seed registries),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                signature: $signature:literal,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[(&str, FunctionDefinition)] = &[
            $(
                ($name, FunctionDefinition { implementation: $func, signature: $signature }),
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"   => { signature: "sin(x)",        func: builtin::sin },
    "cos"   => { signature: "cos(x)",        func: builtin::cos },
    "tan"   => { signature: "tan(x)",        func: builtin::tan },
    "ctg"   => { signature: "ctg(x)",        func: builtin::ctg },
    "sec"   => { signature: "sec(x)",        func: builtin::sec },
    "csc"   => { signature: "csc(x)",        func: builtin::csc },
    "round" => { signature: "round(x)",      func: builtin::round },
    "floor" => { signature: "floor(x)",      func: builtin::floor },
    "ceil"  => { signature: "ceil(x)",       func: builtin::ceil },
    "abs"   => { signature: "abs(x)",        func: builtin::abs },
    "sgn"   => { signature: "sgn(x)",        func: builtin::sgn },
    "ln"    => { signature: "ln(x)",         func: logarithm::ln },
    "log2"  => { signature: "log2(x)",       func: logarithm::log2 },
    "log10" => { signature: "log10(x)",      func: logarithm::log10 },
    "log"   => { signature: "log(x, base)",  func: logarithm::log },
}

/// Maps function names to their definitions.
///
/// A registry is filled once and then only read during evaluation.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, FunctionDefinition>,
}

impl FunctionRegistry {
    /// Creates a registry without any function.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in function.
    ///
    /// ## Example
    /// ```
    /// use symcalc::interpreter::evaluator::function::core::{BUILTIN_FUNCTIONS, FunctionRegistry};
    ///
    /// let functions = FunctionRegistry::with_builtins();
    /// assert_eq!(functions.len(), BUILTIN_FUNCTIONS.len());
    /// assert_eq!(functions.get("log").unwrap().signature, "log(x, base)");
    /// ```
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, definition) in BUILTIN_TABLE {
            registry.register(*name, definition.implementation, definition.signature);
        }
        registry
    }

    /// Adds `name`, replacing an existing function of the same name.
    pub fn register(&mut self,
                    name: impl Into<String>,
                    implementation: NativeFn,
                    signature: &'static str) {
        self.functions.insert(name.into(),
                              FunctionDefinition { implementation,
                                                   signature });
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FunctionDefinition> {
        self.functions.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Iterates over the registered functions in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FunctionDefinition)> {
        self.functions.iter().map(|(name, definition)| (name.as_str(), definition))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// Ensures that a builtin was called with `expected` arguments.
///
/// # Errors
/// `WrongArgumentCount` at `location`, naming the signature.
pub(crate) fn check_arity(args: &[Quantity],
                          expected: usize,
                          signature: &str,
                          location: Location)
                          -> Result<()> {
    if args.len() == expected {
        return Ok(());
    }
    Err(Error::new(ErrorCode::WrongArgumentCount,
                   location,
                   format!("function {signature} takes {expected} argument(s)")))
}

impl Evaluator<'_> {
    /// Evaluates a function call.
    ///
    /// The function is looked up first, then all arguments are evaluated
    /// left to right and passed to the native implementation together with
    /// the location of the call.
    ///
    /// # Errors
    /// - `UndefinedFunction` at the function name when it is not registered.
    /// - `FailedToEvaluateArguments` at the call, wrapping the first failing
    ///   argument.
    /// - Whatever the implementation reports.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Node],
                                     location: Location)
                                     -> EvalResult<Quantity> {
        let Some(function) = self.functions.get(name).copied() else {
            let name_end = location.begin + name.chars().count();
            let name_location =
                if location.is_synthetic() { location } else { Location::new(location.begin, name_end) };
            return Err(Error::new(ErrorCode::UndefinedFunction,
                                  name_location,
                                  format!("undefined function '{name}'")));
        };

        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            let value = self.eval(argument).map_err(|e| {
                                               Error::wrapping(ErrorCode::FailedToEvaluateArguments,
                                                               location,
                                                               format!("failed to evaluate arguments \
                                                                        of {}",
                                                                       function.signature),
                                                               e)
                                           })?;
            values.push(value);
        }

        trace!("calling {} with {} argument(s)", function.signature, values.len());
        (function.implementation)(&values, location)
    }
}
