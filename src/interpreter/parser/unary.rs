use std::iter::Peekable;

use crate::{
    ast::{Node, UnaryOperator},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_term,
            core::ParseResult,
            utils::{parse_arguments, unclosed_parenthesis, unexpected_end_of_input, unexpected_token},
        },
    },
    location::Location,
};

/// Parses a unary expression.
///
/// Supports the prefix operators `+` (identity) and `-` (negation). Unary
/// operators are right-associative, so `-+x` parses as `-(+x)`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_unit_application`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | unit_application
/// ```
/// # Returns
/// A [`Node::UnaryOp`] spanning from the operator to the end of its operand,
/// or the unit application.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let Some(sign) = tokens.next_if(|t| matches!(t.kind, TokenKind::Plus | TokenKind::Minus))
    else {
        return parse_unit_application(tokens);
    };

    let op = if sign.kind == TokenKind::Plus { UnaryOperator::Plus } else { UnaryOperator::Negate };
    let operand = parse_unary(tokens)?;
    let location = sign.location.to(operand.location());
    Ok(Node::UnaryOp { op,
                       operand: Box::new(operand),
                       location })
}

/// Parses a primary expression with an optional unit suffix.
///
/// Grammar: `unit_application := primary unit?`
pub(crate) fn parse_unit_application<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let primary = parse_primary(tokens)?;

    let Some(suffix) = tokens.next_if(|t| t.kind == TokenKind::Unit) else {
        return Ok(primary);
    };

    let location = primary.location().to(suffix.location);
    Ok(Node::UnitApplication { expr: Box::new(primary),
                               unit: Box::new(Node::Unit { name:     suffix.text.clone(),
                                                           location: suffix.location, }),
                               location })
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := number
///              | identifier
///              | identifier "(" arguments
///              | "(" term ")"
/// ```
/// # Errors
/// `UnexpectedToken` for any other token or for the end of input.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let token = tokens.peek().copied().ok_or_else(unexpected_end_of_input)?;

    match token.kind {
        TokenKind::Number => {
            tokens.next();
            Ok(Node::NumberLiteral { text:     token.text.clone(),
                                     location: token.location, })
        },
        TokenKind::Identifier => parse_identifier_or_function(tokens),
        TokenKind::OpenParen => parse_grouping(tokens),
        _ => Err(unexpected_token(token)),
    }
}

/// Parses a parenthesized expression.
///
/// The returned node spans both parentheses so that errors about the group
/// underline all of it.
///
/// Grammar `grouping := "(" term ")"`
///
/// # Errors
/// - `UnclosedParentheses` at the `(` when the input ends first.
/// - `UnexpectedToken` at whatever token stands where `)` belongs.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let open = tokens.next().map_or(Location::SYNTHETIC, |t| t.location);
    if tokens.peek().is_none() {
        return Err(unclosed_parenthesis(open));
    }

    let inner = parse_term(tokens)?;
    match tokens.next() {
        Some(close) if close.kind == TokenKind::CloseParen => {
            Ok(inner.with_location(open.to(close.location)))
        },
        Some(token) => Err(unexpected_token(token)),
        None => Err(unclosed_parenthesis(open)),
    }
}

/// Parses either a variable reference or a function call.
///
/// An identifier directly followed by `(` starts a call whose span runs from
/// the name to the closing parenthesis.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let name = tokens.next().ok_or_else(unexpected_end_of_input)?;

    let Some(open) = tokens.next_if(|t| t.kind == TokenKind::OpenParen) else {
        return Ok(Node::Variable { name:     name.text.clone(),
                                   location: name.location, });
    };

    let (arguments, close) = parse_arguments(tokens, open.location)?;
    Ok(Node::FunctionCall { name: name.text.clone(),
                            arguments,
                            location: name.location.to(close) })
}
