use std::fmt::{self, Write as _};

use crate::location::Location;

/// An abstract syntax tree (AST) node representing an expression.
///
/// The tree is strictly owned: every node owns its children through `Box` or
/// `Vec`, subtrees are never shared and consumers never mutate a tree in
/// place. Rewrites (optimizing, differentiating) build new trees, moving
/// unchanged subtrees where possible and deep-copying them with
/// [`Node::detached`] where a subtree is needed twice.
///
/// Equality between nodes is structural: two nodes are equal when they have
/// the same variant, the same operator/name/text and pairwise equal children.
/// Source locations take no part in the comparison.
#[derive(Debug, Clone)]
pub enum Node {
    /// A binary operation such as `a + b`.
    BinaryOp {
        /// The operator.
        op:       BinaryOperator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Span from the first token of `left` to the last token of `right`.
        location: Location,
    },
    /// A prefix `+` or `-`.
    UnaryOp {
        /// The operator.
        op:       UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
        /// Span from the operator to the end of the operand.
        location: Location,
    },
    /// A numeric literal kept in its textual form (`42`, `1.5e3`, `0x1F`).
    NumberLiteral {
        /// The literal as written, or as re-rendered by the optimizer.
        text:     String,
        /// Span of the literal.
        location: Location,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Span of the name.
        location: Location,
    },
    /// Function call expression (e.g. `log(x, 2)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in order.
        arguments: Vec<Self>,
        /// Span from the name to the closing parenthesis.
        location:  Location,
    },
    /// `target = value`.
    Assignment {
        /// The assigned variable; always a [`Node::Variable`].
        target:   Box<Self>,
        /// The assigned expression.
        value:    Box<Self>,
        /// Span of the whole assignment.
        location: Location,
    },
    /// A unit suffix such as `km`. Only valid inside a
    /// [`Node::UnitApplication`].
    Unit {
        /// The suffix as written.
        name:     String,
        /// Span of the suffix.
        location: Location,
    },
    /// An expression followed by a unit suffix, e.g. `3 km`.
    UnitApplication {
        /// The dimensionless or dimensioned operand.
        expr:     Box<Self>,
        /// The applied [`Node::Unit`].
        unit:     Box<Self>,
        /// Span from the operand to the suffix.
        location: Location,
    },
}

/// Represents a binary operator.
///
/// The parser resolves the operator's symbol once; everything after parsing
/// dispatches on this enum.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl BinaryOperator {
    /// The operator's source symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        }
    }

    /// Binding strength, matching the grammar's levels.
    const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => TERM,
            Self::Mul | Self::Div | Self::Mod => FACTOR,
            Self::Pow => POWER,
        }
    }
}

impl UnaryOperator {
    /// The operator's source symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Negate => "-",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

const ASSIGNMENT: u8 = 0;
const TERM: u8 = 1;
const FACTOR: u8 = 2;
const POWER: u8 = 3;
const UNARY: u8 = 4;
const UNIT_APPLICATION: u8 = 5;
const PRIMARY: u8 = 6;

impl Node {
    /// A synthesized numeric literal.
    #[must_use]
    pub fn number(text: impl Into<String>) -> Self {
        Self::NumberLiteral { text:     text.into(),
                              location: Location::SYNTHETIC, }
    }

    /// A synthesized variable reference.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name:     name.into(),
                         location: Location::SYNTHETIC, }
    }

    /// A synthesized binary operation.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right),
                         location: Location::SYNTHETIC }
    }

    /// A synthesized unary operation.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::UnaryOp { op,
                        operand: Box::new(operand),
                        location: Location::SYNTHETIC }
    }

    /// A synthesized negation.
    #[must_use]
    pub fn negate(operand: Self) -> Self {
        Self::unary(UnaryOperator::Negate, operand)
    }

    /// A synthesized function call.
    #[must_use]
    pub fn call(name: impl Into<String>, arguments: Vec<Self>) -> Self {
        Self::FunctionCall { name: name.into(),
                             arguments,
                             location: Location::SYNTHETIC }
    }

    /// A synthesized unit application `expr unit`.
    #[must_use]
    pub fn with_unit(expr: Self, unit: impl Into<String>) -> Self {
        Self::UnitApplication { expr:     Box::new(expr),
                                unit:     Box::new(Self::Unit { name:     unit.into(),
                                                                location: Location::SYNTHETIC, }),
                                location: Location::SYNTHETIC, }
    }

    /// Gets the source span of `self`.
    /// ## Example
    /// ```
    /// use symcalc::{ast::Node, location::Location};
    ///
    /// let node = Node::Variable { name:     "x".to_string(),
    ///                             location: Location::new(5, 6), };
    ///
    /// assert_eq!(node.location(), Location::new(5, 6));
    /// ```
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::BinaryOp { location, .. }
            | Self::UnaryOp { location, .. }
            | Self::NumberLiteral { location, .. }
            | Self::Variable { location, .. }
            | Self::FunctionCall { location, .. }
            | Self::Assignment { location, .. }
            | Self::Unit { location, .. }
            | Self::UnitApplication { location, .. } => *location,
        }
    }

    /// Returns `self` with its own span replaced by `location`.
    #[must_use]
    pub fn with_location(mut self, new_location: Location) -> Self {
        match &mut self {
            Self::BinaryOp { location, .. }
            | Self::UnaryOp { location, .. }
            | Self::NumberLiteral { location, .. }
            | Self::Variable { location, .. }
            | Self::FunctionCall { location, .. }
            | Self::Assignment { location, .. }
            | Self::Unit { location, .. }
            | Self::UnitApplication { location, .. } => *location = new_location,
        }
        self
    }

    /// Deep-copies the tree with every location reset to
    /// [`Location::SYNTHETIC`].
    #[must_use]
    pub fn detached(&self) -> Self {
        match self {
            Self::BinaryOp { op, left, right, .. } => {
                Self::binary(*op, left.detached(), right.detached())
            },
            Self::UnaryOp { op, operand, .. } => Self::unary(*op, operand.detached()),
            Self::NumberLiteral { text, .. } => Self::number(text.clone()),
            Self::Variable { name, .. } => Self::variable(name.clone()),
            Self::FunctionCall { name, arguments, .. } => {
                Self::call(name.clone(), arguments.iter().map(Self::detached).collect())
            },
            Self::Assignment { target, value, .. } => {
                Self::Assignment { target:   Box::new(target.detached()),
                                   value:    Box::new(value.detached()),
                                   location: Location::SYNTHETIC, }
            },
            Self::Unit { name, .. } => Self::Unit { name:     name.clone(),
                                                    location: Location::SYNTHETIC, },
            Self::UnitApplication { expr, unit, .. } => {
                Self::UnitApplication { expr:     Box::new(expr.detached()),
                                        unit:     Box::new(unit.detached()),
                                        location: Location::SYNTHETIC, }
            },
        }
    }

    /// Returns `true` for a [`Node::NumberLiteral`].
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::NumberLiteral { .. })
    }

    /// Name of the variant, as shown by [`Node::dump`].
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::BinaryOp { .. } => "BinaryOperator",
            Self::UnaryOp { .. } => "UnaryOperator",
            Self::NumberLiteral { .. } => "NumberLiteral",
            Self::Variable { .. } => "Variable",
            Self::FunctionCall { .. } => "FunctionCall",
            Self::Assignment { .. } => "Assignment",
            Self::Unit { .. } => "Unit",
            Self::UnitApplication { .. } => "UnitApplication",
        }
    }

    /// Renders the tree one node per line, children indented below their
    /// parent.
    ///
    /// ## Example
    /// ```
    /// use symcalc::ast::{BinaryOperator, Node};
    ///
    /// let tree = Node::binary(BinaryOperator::Add, Node::variable("x"), Node::number("1"));
    /// assert_eq!(tree.dump(), "BinaryOperator(+)\n  Variable(x)\n  NumberLiteral(1)\n");
    /// ```
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        let content = match self {
            Self::BinaryOp { op, .. } => op.symbol(),
            Self::UnaryOp { op, .. } => op.symbol(),
            Self::NumberLiteral { text, .. } => text.as_str(),
            Self::Variable { name, .. } | Self::FunctionCall { name, .. } | Self::Unit { name, .. } => {
                name.as_str()
            },
            Self::Assignment { .. } => "=",
            Self::UnitApplication { .. } => "",
        };
        let _ = writeln!(out, "{:indent$}{}({content})", "", self.kind_name(), indent = depth * 2);
        for child in self.children() {
            child.dump_into(out, depth + 1);
        }
    }

    /// The direct children in source order.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Self::UnaryOp { operand, .. } => vec![operand.as_ref()],
            Self::FunctionCall { arguments, .. } => arguments.iter().collect(),
            Self::Assignment { target, value, .. } => vec![target.as_ref(), value.as_ref()],
            Self::UnitApplication { expr, unit, .. } => vec![expr.as_ref(), unit.as_ref()],
            Self::NumberLiteral { .. } | Self::Variable { .. } | Self::Unit { .. } => Vec::new(),
        }
    }

    /// Renders the expression as source text that parses back to an equal
    /// tree.
    #[must_use]
    pub fn to_expression_string(&self) -> String {
        self.to_string()
    }

    fn precedence(&self) -> u8 {
        match self {
            Self::Assignment { .. } => ASSIGNMENT,
            Self::BinaryOp { op, .. } => op.precedence(),
            Self::UnaryOp { .. } => UNARY,
            Self::NumberLiteral { text, .. } if text.starts_with('-') => UNARY,
            Self::UnitApplication { .. } => UNIT_APPLICATION,
            Self::NumberLiteral { .. }
            | Self::Variable { .. }
            | Self::FunctionCall { .. }
            | Self::Unit { .. } => PRIMARY,
        }
    }
}

/// Writes `node`, parenthesized when it binds looser than `minimum`.
fn write_operand(f: &mut fmt::Formatter<'_>, node: &Node, minimum: u8) -> fmt::Result {
    if node.precedence() < minimum { write!(f, "({node})") } else { write!(f, "{node}") }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BinaryOp { op, left, right, .. } => {
                let level = op.precedence();
                write_operand(f, left, level)?;
                write!(f, " {op} ")?;
                write_operand(f, right, if *op == BinaryOperator::Pow { UNARY } else { level + 1 })
            },
            Self::UnaryOp { op, operand, .. } => {
                write!(f, "{op}")?;
                write_operand(f, operand, UNARY)
            },
            Self::NumberLiteral { text, .. } => f.write_str(text),
            Self::Variable { name, .. } | Self::Unit { name, .. } => f.write_str(name),
            Self::FunctionCall { name, arguments, .. } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_operand(f, argument, TERM)?;
                }
                f.write_str(")")
            },
            Self::Assignment { target, value, .. } => {
                write!(f, "{target} = ")?;
                write_operand(f, value, TERM)
            },
            Self::UnitApplication { expr, unit, .. } => {
                write_operand(f, expr, PRIMARY)?;
                write!(f, " {unit}")
            },
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::BinaryOp { op: a_op,
                              left: a_left,
                              right: a_right,
                              .. },
             Self::BinaryOp { op: b_op,
                              left: b_left,
                              right: b_right,
                              .. }) => a_op == b_op && a_left == b_left && a_right == b_right,
            (Self::UnaryOp { op: a_op,
                             operand: a,
                             .. },
             Self::UnaryOp { op: b_op,
                             operand: b,
                             .. }) => a_op == b_op && a == b,
            (Self::NumberLiteral { text: a, .. }, Self::NumberLiteral { text: b, .. })
            | (Self::Variable { name: a, .. }, Self::Variable { name: b, .. })
            | (Self::Unit { name: a, .. }, Self::Unit { name: b, .. }) => a == b,
            (Self::FunctionCall { name: a_name,
                                  arguments: a_args,
                                  .. },
             Self::FunctionCall { name: b_name,
                                  arguments: b_args,
                                  .. }) => a_name == b_name && a_args == b_args,
            (Self::Assignment { target: a_target,
                                value: a_value,
                                .. },
             Self::Assignment { target: b_target,
                                value: b_value,
                                .. }) => a_target == b_target && a_value == b_value,
            (Self::UnitApplication { expr: a_expr,
                                     unit: a_unit,
                                     .. },
             Self::UnitApplication { expr: b_expr,
                                     unit: b_unit,
                                     .. }) => a_expr == b_expr && a_unit == b_unit,
            _ => false,
        }
    }
}
