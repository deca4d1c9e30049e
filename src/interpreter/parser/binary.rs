use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `term := factor (("+" | "-") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// A `Node::BinaryOp` tree spanning from its first to its last token.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_factor(tokens)?;
    while let Some(op) = next_operator(tokens, &[BinaryOperator::Add, BinaryOperator::Sub]) {
        let right = parse_factor(tokens)?;
        left = combine(op, left, right);
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `factor := power (("*" | "/" | "%") power)*`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_power(tokens)?;
    while let Some(op) =
        next_operator(tokens, &[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod])
    {
        let right = parse_power(tokens)?;
        left = combine(op, left, right);
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Repeated exponentiation groups to the left, so `a ^ b ^ c` parses as
/// `(a ^ b) ^ c`. Both operands are unary expressions, which makes `-2 ^ 2`
/// equal to `(-2) ^ 2`.
///
/// The rule is: `power := unary ("^" unary)*`
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_unary(tokens)?;
    while let Some(op) = next_operator(tokens, &[BinaryOperator::Pow]) {
        let right = parse_unary(tokens)?;
        left = combine(op, left, right);
    }
    Ok(left)
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators.
///
/// # Example
/// ```
/// use symcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Caret), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(TokenKind::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Asterisk => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        TokenKind::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Consumes the next token if it is one of `accepted` and returns its
/// operator.
fn next_operator<'a, I>(tokens: &mut Peekable<I>,
                        accepted: &[BinaryOperator])
                        -> Option<BinaryOperator>
    where I: Iterator<Item = &'a Token>
{
    let op = tokens.peek()
                   .and_then(|token| token_to_binary_operator(token.kind))
                   .filter(|op| accepted.contains(op))?;
    tokens.next();
    Some(op)
}

fn combine(op: BinaryOperator, left: Node, right: Node) -> Node {
    let location = left.location().to(right.location());
    Node::BinaryOp { op,
                     left: Box::new(left),
                     right: Box::new(right),
                     location }
}
