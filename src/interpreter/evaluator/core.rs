use std::{
    collections::HashMap,
    f64::consts::{E, PI},
};

use log::debug;

use crate::{
    ast::Node,
    error::{Error, ErrorCode, Result},
    interpreter::{
        evaluator::{function::core::FunctionRegistry, literal::parse_number_literal},
        value::{quantity::Quantity, unit::unit_conversion},
    },
    location::Location,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T>;

/// Maps variable names to their current values.
///
/// Entries are created or overwritten only by evaluating an assignment. A
/// table kept across calls carries variables from one expression to the
/// next, as in an interactive session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    values: HashMap<String, Quantity>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding the constants `pi` and `e`.
    ///
    /// ## Example
    /// ```
    /// use symcalc::interpreter::evaluator::core::SymbolTable;
    ///
    /// let symbols = SymbolTable::with_constants();
    /// assert_eq!(symbols.get("pi").unwrap().value, std::f64::consts::PI);
    /// ```
    #[must_use]
    pub fn with_constants() -> Self {
        let mut symbols = Self::new();
        symbols.set("pi", Quantity::scalar(PI));
        symbols.set("e", Quantity::scalar(E));
        symbols
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Quantity> {
        self.values.get(name)
    }

    /// Binds `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: Quantity) {
        self.values.insert(name.into(), value);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Quantity)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Walks a syntax tree and computes its value.
///
/// The evaluator borrows the symbol table mutably, since assignments write to
/// it, and the function registry immutably.
pub struct Evaluator<'a> {
    /// Variables visible to the expression.
    pub symbols:   &'a mut SymbolTable,
    /// Functions callable from the expression.
    pub functions: &'a FunctionRegistry,
}

impl<'a> Evaluator<'a> {
    #[must_use]
    pub const fn new(symbols: &'a mut SymbolTable, functions: &'a FunctionRegistry) -> Self {
        Self { symbols, functions }
    }

    /// Evaluates an expression and returns the resulting quantity.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on node variant; everything but
    /// [`Node::Assignment`] is free of side effects.
    ///
    /// # Errors
    /// Any evaluator error; see the individual `eval_*` methods.
    pub fn eval(&mut self, node: &Node) -> EvalResult<Quantity> {
        match node {
            Node::NumberLiteral { text, location } => parse_number_literal(text, *location),
            Node::Variable { name, location } => self.eval_variable(name, *location),
            Node::UnaryOp { op,
                            operand,
                            location, } => self.eval_unary_op(*op, operand, *location),
            Node::BinaryOp { op,
                             left,
                             right,
                             location, } => self.eval_binary_op(*op, left, right, *location),
            Node::FunctionCall { name,
                                 arguments,
                                 location, } => self.eval_function_call(name, arguments, *location),
            Node::Assignment { target,
                               value,
                               location, } => self.eval_assignment(target, value, *location),
            Node::UnitApplication { expr, unit, .. } => self.eval_unit_application(expr, unit),
            Node::Unit { name, location } => {
                Err(Error::new(ErrorCode::ReachedUnreachableCodePath,
                               *location,
                               format!("Unit '{name}' evaluated outside of a unit application.")))
            },
        }
    }

    /// Looks a variable up in the symbol table.
    ///
    /// # Errors
    /// `UndefinedVariable` at the variable when it has no value.
    fn eval_variable(&self, name: &str, location: Location) -> EvalResult<Quantity> {
        self.symbols.get(name).copied().ok_or_else(|| {
                                                   Error::new(ErrorCode::UndefinedVariable,
                                                              location,
                                                              format!("undefined variable '{name}'"))
                                               })
    }

    /// Evaluates the right-hand side and stores it under the target's name.
    ///
    /// # Errors
    /// - `FailedToEvaluateArguments` wrapping the right-hand side's failure.
    /// - `ReachedUnreachableCodePath` if the target is not a variable, which
    ///   the parser never produces.
    fn eval_assignment(&mut self,
                       target: &Node,
                       value: &Node,
                       location: Location)
                       -> EvalResult<Quantity> {
        let Node::Variable { name, .. } = target else {
            return Err(Error::new(ErrorCode::ReachedUnreachableCodePath,
                                  target.location(),
                                  "Assignment target is not a variable."));
        };

        let result = self.eval(value).map_err(|e| {
                                         Error::wrapping(ErrorCode::FailedToEvaluateArguments,
                                                         location,
                                                         format!("failed to evaluate the value \
                                                                  assigned to '{name}'"),
                                                         e)
                                     })?;

        debug!("assigning {name} = {result}");
        self.symbols.set(name.clone(), result);
        Ok(result)
    }

    /// Evaluates `expr` and multiplies it by the unit's conversion quantity.
    ///
    /// # Errors
    /// - `ReachedUnreachableCodePath` when `unit` is not a known
    ///   [`Node::Unit`].
    /// - `DimensionOverflow` at the unit when the dimension power overflows.
    fn eval_unit_application(&mut self, expr: &Node, unit: &Node) -> EvalResult<Quantity> {
        let conversion = match unit {
            Node::Unit { name, .. } => unit_conversion(name),
            _ => None,
        };
        let Some(conversion) = conversion else {
            return Err(Error::new(ErrorCode::ReachedUnreachableCodePath,
                                  unit.location(),
                                  format!("'{unit}' is not a unit.")));
        };

        self.eval(expr)?
            .multiply(conversion)
            .map_err(|error| error.at(unit.location()))
    }
}

/// Evaluates `node` with the given variables and functions.
///
/// # Errors
/// The first failure met while walking the tree.
///
/// # Example
/// ```
/// use symcalc::interpreter::{
///     evaluator::{
///         core::{SymbolTable, evaluate},
///         function::core::FunctionRegistry,
///     },
///     lexer::tokenize,
///     parser::core::parse,
/// };
///
/// let mut symbols = SymbolTable::new();
/// let functions = FunctionRegistry::with_builtins();
///
/// let tree = parse(&tokenize("r = 2 m").unwrap()).unwrap();
/// evaluate(&tree, &mut symbols, &functions).unwrap();
///
/// let tree = parse(&tokenize("r * r").unwrap()).unwrap();
/// let area = evaluate(&tree, &mut symbols, &functions).unwrap();
/// assert!(area.is_area());
/// assert_eq!(area.value, 4.0);
/// ```
pub fn evaluate(node: &Node,
                symbols: &mut SymbolTable,
                functions: &FunctionRegistry)
                -> EvalResult<Quantity> {
    Evaluator::new(symbols, functions).eval(node)
}

/// Evaluates `node` with no variables and no functions.
///
/// Succeeds exactly when the subtree is a constant that can be computed
/// before any run-time value is known.
///
/// # Errors
/// As [`evaluate`]; any variable or call fails.
pub fn evaluate_parse_time(node: &Node) -> EvalResult<Quantity> {
    let mut symbols = SymbolTable::new();
    let functions = FunctionRegistry::new();
    evaluate(node, &mut symbols, &functions)
}
