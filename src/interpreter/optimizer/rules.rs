use log::trace;

use crate::{
    ast::{BinaryOperator, Node},
    interpreter::evaluator::core::evaluate_parse_time,
    location::Location,
};

/// Whether `node` evaluates, without variables or functions, to the
/// dimensionless `value`.
fn is_scalar_constant(node: &Node, value: f64) -> bool {
    evaluate_parse_time(node).is_ok_and(|q| q.is_scalar_near(value))
}

/// Whether a unit appears anywhere below `node`.
fn has_unit(node: &Node) -> bool {
    matches!(node, Node::Unit { .. }) || node.children().into_iter().any(has_unit)
}

fn zero(location: Location) -> Node {
    Node::number("0").with_location(location)
}

/// Applies the algebraic identities of `op` to already optimized operands.
///
/// - `+`: `x + 0` and `0 + x` give `x`.
/// - `-`: `x - x` gives `0`, `x - 0` gives `x`, `0 - x` gives `-x`.
/// - `*`: `x * x` gives `x ^ 2`, a zero factor gives `0`, a factor `1` is
///   dropped, a factor `-1` negates.
/// - `/`: `x / x` gives `1`, `0 / x` gives `0`, `x / 1` gives `x`, `x / -1`
///   gives `-x`.
/// - `^`: `x ^ 0` gives `1`, `x ^ 1` gives `x`.
///
/// Operands are compared structurally; constants are recognized only when
/// dimensionless. Identities that would drop a `0` term, or replace a
/// product or difference by a plain `0`, are skipped when the other operand
/// carries a unit. A node that matches no identity is rebuilt unchanged.
#[must_use]
pub fn simplify_binary(op: BinaryOperator, left: Node, right: Node, location: Location) -> Node {
    let rewritten = match op {
        BinaryOperator::Add => simplify_add(left, right),
        BinaryOperator::Sub => simplify_sub(left, right, location),
        BinaryOperator::Mul => simplify_mul(left, right, location),
        BinaryOperator::Div => simplify_div(left, right, location),
        BinaryOperator::Pow => simplify_pow(left, right, location),
        BinaryOperator::Mod => Err((left, right)),
    };

    match rewritten {
        Ok(node) => {
            trace!("applied '{op}' identity, got '{node}'");
            node
        },
        Err((left, right)) => Node::BinaryOp { op,
                                               left: Box::new(left),
                                               right: Box::new(right),
                                               location },
    }
}

/// Either the rewritten node or the operands handed back untouched.
type Rewrite = Result<Node, (Node, Node)>;

fn simplify_add(left: Node, right: Node) -> Rewrite {
    if has_unit(&left) || has_unit(&right) {
        Err((left, right))
    } else if is_scalar_constant(&left, 0.0) {
        Ok(right)
    } else if is_scalar_constant(&right, 0.0) {
        Ok(left)
    } else {
        Err((left, right))
    }
}

fn simplify_sub(left: Node, right: Node, location: Location) -> Rewrite {
    if has_unit(&left) || has_unit(&right) {
        Err((left, right))
    } else if left == right {
        Ok(zero(location))
    } else if is_scalar_constant(&right, 0.0) {
        Ok(left)
    } else if is_scalar_constant(&left, 0.0) {
        Ok(Node::negate(right).with_location(location))
    } else {
        Err((left, right))
    }
}

fn simplify_mul(left: Node, right: Node, location: Location) -> Rewrite {
    if left == right {
        return Ok(Node::binary(BinaryOperator::Pow, left, Node::number("2")).with_location(location));
    }
    if (is_scalar_constant(&left, 0.0) && !has_unit(&right))
       || (is_scalar_constant(&right, 0.0) && !has_unit(&left))
    {
        return Ok(zero(location));
    }
    if is_scalar_constant(&left, 1.0) {
        return Ok(right);
    }
    if is_scalar_constant(&right, 1.0) {
        return Ok(left);
    }
    if is_scalar_constant(&left, -1.0) {
        return Ok(Node::negate(right).with_location(location));
    }
    if is_scalar_constant(&right, -1.0) {
        return Ok(Node::negate(left).with_location(location));
    }
    Err((left, right))
}

fn simplify_div(left: Node, right: Node, location: Location) -> Rewrite {
    if left == right {
        Ok(Node::number("1").with_location(location))
    } else if is_scalar_constant(&left, 0.0) && !has_unit(&right) {
        Ok(zero(location))
    } else if is_scalar_constant(&right, 1.0) {
        Ok(left)
    } else if is_scalar_constant(&right, -1.0) {
        Ok(Node::negate(left).with_location(location))
    } else {
        Err((left, right))
    }
}

fn simplify_pow(base: Node, exponent: Node, location: Location) -> Rewrite {
    if is_scalar_constant(&exponent, 0.0) {
        Ok(Node::number("1").with_location(location))
    } else if is_scalar_constant(&exponent, 1.0) {
        Ok(base)
    } else {
        Err((base, exponent))
    }
}
