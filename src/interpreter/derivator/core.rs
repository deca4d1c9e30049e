use log::debug;

use crate::{
    ast::{BinaryOperator, Node},
    error::{Error, ErrorCode, Result},
    interpreter::{
        derivator::rules::derive_function,
        evaluator::core::evaluate_parse_time,
        optimizer::core::optimize,
    },
    location::Location,
};

/// Differentiates `node` with respect to the variable named `variable`.
///
/// The derivative is built from synthesized nodes and passed through
/// [`optimize`] before it is returned, so `x ^ 2` yields `2 * x` rather than
/// `2 * x ^ (2 - 1) * 1`.
///
/// Powers with a non-literal exponent use `base ^ exponent * ln(base)`, which
/// only holds when the exponent does not depend on `variable`.
///
/// # Errors
/// - `DerivatorGeneralError` for `%`, bare units and unknown functions.
/// - `FunctionNotDerivable` for `round`, `floor`, `ceil`, `abs` and `sgn`.
/// - `DerivatorWrongArgumentCount` for a known function called with the
///   wrong number of arguments.
/// - `CantBeDoneAtParseTime` for `log(x, base)` with a non-constant base.
///
/// # Example
/// ```
/// use symcalc::interpreter::{derivator::core::derive, lexer::tokenize, parser::core::parse};
///
/// let tree = parse(&tokenize("x ^ 3 + 2 * x").unwrap()).unwrap();
/// let derivative = derive(&tree, "x").unwrap();
/// assert_eq!(derivative.to_string(), "3 * x ^ 2 + 2");
/// ```
pub fn derive(node: &Node, variable: &str) -> Result<Node> {
    let raw = derive_raw(node, variable)?;
    let derivative = optimize(raw)?;
    debug!("d/d{variable} [{node}] = {derivative}");
    Ok(derivative)
}

fn derive_raw(node: &Node, variable: &str) -> Result<Node> {
    match node {
        Node::NumberLiteral { .. } => Ok(Node::number("0")),
        Node::Variable { name, .. } => Ok(Node::number(if name == variable { "1" } else { "0" })),
        Node::UnaryOp { op, operand, .. } => Ok(Node::unary(*op, derive(operand, variable)?)),
        Node::Assignment { value, .. } => derive(value, variable),
        Node::UnitApplication { expr, unit, .. } => {
            Ok(Node::UnitApplication { expr:     Box::new(derive(expr, variable)?),
                                       unit:     Box::new(unit.detached()),
                                       location: Location::SYNTHETIC, })
        },
        Node::BinaryOp { op,
                         left,
                         right,
                         location, } => derive_binary(*op, left, right, *location, variable),
        Node::FunctionCall { name,
                             arguments,
                             location, } => derive_function(name, arguments, *location, variable),
        Node::Unit { name, location } => {
            Err(Error::new(ErrorCode::DerivatorGeneralError,
                           *location,
                           format!("Cannot differentiate the bare unit '{name}'.")))
        },
    }
}

fn derive_binary(op: BinaryOperator,
                 left: &Node,
                 right: &Node,
                 location: Location,
                 variable: &str)
                 -> Result<Node> {
    use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

    match op {
        Add | Sub => Ok(Node::binary(op, derive(left, variable)?, derive(right, variable)?)),
        Mul => derive_product(left, right, variable),
        Div => derive_quotient(left, right, variable),
        Pow => derive_power(left, right, variable),
        Mod => Err(Error::new(ErrorCode::DerivatorGeneralError,
                              location,
                              format!("Cannot differentiate the '{op}' operator."))),
    }
}

/// Optimizes a copy of `node` and returns it when it is constant.
fn constant_operand(node: &Node) -> Result<Option<Node>> {
    let folded = optimize(node.detached())?;
    Ok(evaluate_parse_time(&folded).is_ok().then_some(folded))
}

/// `c * g` gives `c * g'`, `f * c` gives `c * f'`, anything else the product
/// rule `f' * g + f * g'`.
fn derive_product(left: &Node, right: &Node, variable: &str) -> Result<Node> {
    use BinaryOperator::{Add, Mul};

    if let Some(constant) = constant_operand(left)? {
        return Ok(Node::binary(Mul, constant, derive(right, variable)?));
    }
    if let Some(constant) = constant_operand(right)? {
        return Ok(Node::binary(Mul, constant, derive(left, variable)?));
    }

    Ok(Node::binary(Add,
                    Node::binary(Mul, derive(left, variable)?, right.detached()),
                    Node::binary(Mul, left.detached(), derive(right, variable)?)))
}

/// `f / c` gives `f' / c`, anything else the quotient rule
/// `(f' * g - f * g') / g ^ 2`.
fn derive_quotient(left: &Node, right: &Node, variable: &str) -> Result<Node> {
    use BinaryOperator::{Div, Mul, Pow, Sub};

    if let Some(constant) = constant_operand(right)? {
        return Ok(Node::binary(Div, derive(left, variable)?, constant));
    }

    let numerator = Node::binary(Sub,
                                 Node::binary(Mul, derive(left, variable)?, right.detached()),
                                 Node::binary(Mul, left.detached(), derive(right, variable)?));
    let denominator = Node::binary(Pow, right.detached(), Node::number("2"));
    Ok(Node::binary(Div, numerator, denominator))
}

/// `f ^ n` with a literal `n` gives `n * f ^ (n - 1) * f'`; any other
/// exponent gives `f ^ e * ln(f)`.
fn derive_power(base: &Node, exponent: &Node, variable: &str) -> Result<Node> {
    use BinaryOperator::{Mul, Pow, Sub};

    if exponent.is_number() {
        let lowered = Node::binary(Sub, exponent.detached(), Node::number("1"));
        let outer = Node::binary(Mul,
                                 exponent.detached(),
                                 Node::binary(Pow, base.detached(), lowered));
        return Ok(Node::binary(Mul, outer, derive(base, variable)?));
    }

    Ok(Node::binary(Mul,
                    Node::binary(Pow, base.detached(), exponent.detached()),
                    Node::call("ln", vec![base.detached()])))
}
