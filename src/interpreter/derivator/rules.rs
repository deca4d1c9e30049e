use crate::{
    ast::{BinaryOperator, Node},
    error::{Error, ErrorCode, Result},
    interpreter::{derivator::core::derive, optimizer::core::optimize},
    location::Location,
};

/// Builds the outer derivative `f'(args)` of a function.
type Rule = fn(&[Node], Location) -> Result<Node>;

/// Derivatives of the functions that have one, keyed by name.
static DERIVATIVES: &[(&str, Rule)] = &[("sin", sin),
                                        ("cos", cos),
                                        ("tan", tan),
                                        ("ctg", ctg),
                                        ("sec", sec),
                                        ("csc", csc),
                                        ("ln", ln),
                                        ("log2", log2),
                                        ("log10", log10),
                                        ("log", log)];

/// Functions with no derivative.
static NOT_DERIVABLE: &[&str] = &["round", "floor", "ceil", "abs", "sgn"];

/// Differentiates a call of the function `name`.
///
/// The outer derivative is multiplied by the derivative of the first
/// argument.
pub(crate) fn derive_function(name: &str,
                              arguments: &[Node],
                              location: Location,
                              variable: &str)
                              -> Result<Node> {
    if NOT_DERIVABLE.contains(&name) {
        return Err(Error::new(ErrorCode::FunctionNotDerivable,
                              location,
                              format!("Function '{name}' is not derivable.")));
    }

    let Some((_, rule)) = DERIVATIVES.iter().find(|(rule_name, _)| *rule_name == name) else {
        return Err(Error::new(ErrorCode::DerivatorGeneralError,
                              location,
                              format!("No derivative is known for function '{name}'.")));
    };

    let outer = rule(arguments, location)?;
    let Some(inner) = arguments.first() else {
        return Err(wrong_argument_count(name, 1, location));
    };
    Ok(Node::binary(BinaryOperator::Mul, outer, derive(inner, variable)?))
}

/// Returns the single argument of a one-argument function, detached.
fn single_argument(name: &str, arguments: &[Node], location: Location) -> Result<Node> {
    match arguments {
        [argument] => Ok(argument.detached()),
        _ => Err(wrong_argument_count(name, 1, location)),
    }
}

fn wrong_argument_count(name: &str, expected: usize, location: Location) -> Error {
    Error::new(ErrorCode::DerivatorWrongArgumentCount,
               location,
               format!("Cannot differentiate '{name}': it takes {expected} argument(s)."))
}

fn reciprocal(node: Node) -> Node {
    Node::binary(BinaryOperator::Div, Node::number("1"), node)
}

fn square(node: Node) -> Node {
    Node::binary(BinaryOperator::Pow, node, Node::number("2"))
}

fn sin(arguments: &[Node], location: Location) -> Result<Node> {
    Ok(Node::call("cos", vec![single_argument("sin", arguments, location)?]))
}

fn cos(arguments: &[Node], location: Location) -> Result<Node> {
    Ok(Node::negate(Node::call("sin", vec![single_argument("cos", arguments, location)?])))
}

fn tan(arguments: &[Node], location: Location) -> Result<Node> {
    let x = single_argument("tan", arguments, location)?;
    Ok(reciprocal(square(Node::call("cos", vec![x]))))
}

fn ctg(arguments: &[Node], location: Location) -> Result<Node> {
    let x = single_argument("ctg", arguments, location)?;
    Ok(Node::negate(reciprocal(square(Node::call("sin", vec![x])))))
}

fn sec(arguments: &[Node], location: Location) -> Result<Node> {
    let x = single_argument("sec", arguments, location)?;
    Ok(Node::binary(BinaryOperator::Mul,
                    Node::call("sec", vec![x.detached()]),
                    Node::call("tan", vec![x])))
}

fn csc(arguments: &[Node], location: Location) -> Result<Node> {
    let x = single_argument("csc", arguments, location)?;
    Ok(Node::negate(Node::binary(BinaryOperator::Mul,
                                 Node::call("csc", vec![x.detached()]),
                                 Node::call("ctg", vec![x]))))
}

fn ln(arguments: &[Node], location: Location) -> Result<Node> {
    Ok(reciprocal(single_argument("ln", arguments, location)?))
}

/// `(1 / ln(base)) * (1 / x)`.
fn logarithm(x: Node, base: Node) -> Node {
    Node::binary(BinaryOperator::Mul,
                 reciprocal(Node::call("ln", vec![base])),
                 reciprocal(x))
}

fn log2(arguments: &[Node], location: Location) -> Result<Node> {
    Ok(logarithm(single_argument("log2", arguments, location)?, Node::number("2")))
}

fn log10(arguments: &[Node], location: Location) -> Result<Node> {
    Ok(logarithm(single_argument("log10", arguments, location)?, Node::number("10")))
}

fn log(arguments: &[Node], location: Location) -> Result<Node> {
    let [x, base] = arguments else {
        return Err(wrong_argument_count("log", 2, location));
    };

    let base = optimize(base.detached())?;
    if !base.is_number() {
        return Err(Error::new(ErrorCode::CantBeDoneAtParseTime,
                              location,
                              format!("The base of log must be a constant, found '{base}'.")));
    }
    Ok(logarithm(x.detached(), base))
}
