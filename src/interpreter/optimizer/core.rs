use log::{debug, trace};

use crate::{
    ast::Node,
    error::{Error, ErrorCode, Result},
    interpreter::{evaluator::core::evaluate_parse_time, optimizer::rules::simplify_binary},
    util::num::format_number,
};

/// Simplifies an expression tree.
///
/// Children are optimized before their parent. Every node except an
/// assignment is then folded into a literal if it evaluates without any
/// variable or function to a finite number. A subtree without variables or
/// calls that does not fold (`1 / 0`, `2 m * 3 m`) is kept as it is, so its
/// error or dimension survives. Any other binary operation is rewritten by
/// the identities in [`simplify_binary`]. Assignments keep their shape so
/// that their side effect survives.
///
/// Optimizing twice gives the same tree as optimizing once.
///
/// # Errors
/// `FailedToOptimizeChild` at the child's location when a child fails.
///
/// # Example
/// ```
/// use symcalc::interpreter::{lexer::tokenize, optimizer::core::optimize, parser::core::parse};
///
/// let tree = parse(&tokenize("(2 + 3) * x * 1").unwrap()).unwrap();
/// let optimized = optimize(tree).unwrap();
/// assert_eq!(optimized.to_string(), "5 * x");
/// ```
pub fn optimize(node: Node) -> Result<Node> {
    let optimized = optimize_node(node)?;
    debug!("optimized tree: {optimized}");
    Ok(optimized)
}

fn optimize_node(node: Node) -> Result<Node> {
    match node {
        Node::Assignment { target,
                           value,
                           location, } => Ok(Node::Assignment { target: Box::new(optimize_child(*target)?),
                                                                value: Box::new(optimize_child(*value)?),
                                                                location }),
        other => {
            let node = optimize_children(other)?;
            if let Some(folded) = fold_constant(&node) {
                return Ok(folded);
            }
            if is_ground(&node) {
                return Ok(node);
            }
            match node {
                Node::BinaryOp { op,
                                 left,
                                 right,
                                 location, } => Ok(simplify_binary(op, *left, *right, location)),
                other => Ok(other),
            }
        },
    }
}

/// Optimizes one child, wrapping its failure.
fn optimize_child(child: Node) -> Result<Node> {
    let location = child.location();
    optimize_node(child).map_err(|e| {
                            Error::wrapping(ErrorCode::FailedToOptimizeChild,
                                            location,
                                            "failed to optimize child expression",
                                            e)
                        })
}

fn optimize_children(node: Node) -> Result<Node> {
    Ok(match node {
        Node::BinaryOp { op,
                         left,
                         right,
                         location, } => Node::BinaryOp { op,
                                                         left: Box::new(optimize_child(*left)?),
                                                         right: Box::new(optimize_child(*right)?),
                                                         location },
        Node::UnaryOp { op,
                        operand,
                        location, } => Node::UnaryOp { op,
                                                       operand: Box::new(optimize_child(*operand)?),
                                                       location },
        Node::FunctionCall { name,
                             arguments,
                             location, } => {
            Node::FunctionCall { name,
                                 arguments: arguments.into_iter()
                                                     .map(optimize_child)
                                                     .collect::<Result<_>>()?,
                                 location }
        },
        Node::UnitApplication { expr,
                                unit,
                                location, } => Node::UnitApplication { expr: Box::new(optimize_child(*expr)?),
                                                                       unit,
                                                                       location },
        leaf => leaf,
    })
}

/// Whether `node` contains neither a variable nor a function call.
fn is_ground(node: &Node) -> bool {
    match node {
        Node::Variable { .. } | Node::FunctionCall { .. } => false,
        other => other.children().into_iter().all(is_ground),
    }
}

/// Replaces a constant subtree by its value.
///
/// Dimensionless values become a literal, pure lengths a literal in meters
/// and pure angles a literal in radians. Other dimensions cannot be written
/// as a single literal and unit, so they are left alone. NaN and infinities
/// have no literal and are never folded.
fn fold_constant(node: &Node) -> Option<Node> {
    let value = evaluate_parse_time(node).ok()?;
    if !value.value.is_finite() {
        return None;
    }
    let literal = Node::number(format_number(value.value));

    let folded = if value.is_scalar() {
        literal
    } else if value.is_length() {
        Node::with_unit(literal, "m")
    } else if value.is_angle() {
        Node::with_unit(literal, "rad")
    } else {
        return None;
    };

    trace!("folded '{node}' into '{folded}'");
    Some(folded.with_location(node.location()))
}
