use std::iter::Peekable;

use crate::{
    ast::Node,
    error::{Error, ErrorCode},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_term, core::ParseResult},
    },
    location::Location,
};

/// Parses a non-empty, comma-separated argument list up to its closing `)`.
///
/// The opening parenthesis has already been consumed; `open` is its span.
///
/// Grammar (simplified): `arguments := term ("," term)* ")"`
///
/// # Returns
/// The parsed arguments and the span of the closing parenthesis.
///
/// # Errors
/// - `UnexpectedToken` where neither `,` nor `)` follows an argument, or
///   where an argument is missing.
/// - `UnclosedParentheses` at `open` when the input ends inside the list.
pub(in crate::interpreter::parser) fn parse_arguments<'a, I>(tokens: &mut Peekable<I>,
                                                             open: Location)
                                                             -> ParseResult<(Vec<Node>, Location)>
    where I: Iterator<Item = &'a Token>
{
    let mut arguments = Vec::new();
    loop {
        if tokens.peek().is_none() {
            return Err(unclosed_parenthesis(open));
        }
        arguments.push(parse_term(tokens)?);
        match tokens.next() {
            Some(Token { kind: TokenKind::Comma,
                         .. }) => {},
            Some(Token { kind: TokenKind::CloseParen,
                         location,
                         .. }) => return Ok((arguments, *location)),
            Some(token) => return Err(unexpected_token(token)),
            None => return Err(unclosed_parenthesis(open)),
        }
    }
}

/// `UnexpectedToken` located at `token`.
pub(in crate::interpreter::parser) fn unexpected_token(token: &Token) -> Error {
    Error::new(ErrorCode::UnexpectedToken,
               token.location,
               format!("Unexpected token '{}'.", token.text))
}

/// `UnexpectedToken` for running out of input. The location is filled in by
/// [`crate::interpreter::parser::core::parse`].
pub(in crate::interpreter::parser) fn unexpected_end_of_input() -> Error {
    Error::new(ErrorCode::UnexpectedToken,
               Location::SYNTHETIC,
               "Unexpected end of input.")
}

/// `UnclosedParentheses` anchored at the unmatched `(`.
pub(in crate::interpreter::parser) fn unclosed_parenthesis(open: Location) -> Error {
    Error::new(ErrorCode::UnclosedParentheses, open, "Unclosed parenthesis.")
}
