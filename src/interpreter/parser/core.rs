use std::iter::Peekable;

use log::debug;

use crate::{
    ast::Node,
    error::{Error, ErrorCode, Result},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::binary::parse_term,
    },
    location::Location,
};

pub type ParseResult<T> = Result<T>;

/// Parses a complete token list into a syntax tree.
///
/// This is the entry point for parsing. It descends from the assignment level
/// through the precedence hierarchy and then requires that every token was
/// consumed.
///
/// Grammar: `expression := assignment`
///
/// # Errors
/// - `PartialParse` when tokens remain after a complete expression; the
///   location covers the leftover tokens.
/// - `UnexpectedToken`, `UnclosedParentheses`, `NonVariableAssignment` from
///   the grammar rules. Errors caused by running out of tokens point just
///   past the last token.
/// - `ParserGeneralError` for an empty token list.
///
/// # Example
/// ```
/// use symcalc::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tree = parse(&tokenize("x = 2 * (y + 1)").unwrap()).unwrap();
/// assert_eq!(tree.to_string(), "x = 2 * (y + 1)");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Node> {
    let Some(last) = tokens.last() else {
        return Err(Error::new(ErrorCode::ParserGeneralError,
                              Location::SYNTHETIC,
                              "Unknown error occurred during token list parsing."));
    };
    let end_of_input = Location::new(last.location.end, last.location.end + 1);

    let mut iter = tokens.iter().peekable();
    let root = parse_assignment(&mut iter).map_err(|e| {
                                              if e.location.is_synthetic() {
                                                  e.at(end_of_input)
                                              } else {
                                                  e
                                              }
                                          })?;

    if let Some(extra) = iter.peek() {
        return Err(Error::new(ErrorCode::PartialParse,
                              extra.location.to(last.location),
                              "Token list was only partially parsed. Extraneous parentheses or \
                               missing operands?"));
    }

    debug!("parsed expression '{root}'");
    Ok(root)
}

/// Parses an assignment chain.
///
/// The left side of every `=` must already be a plain variable.
///
/// Grammar: `assignment := term ("=" term)*`
///
/// # Errors
/// `NonVariableAssignment` at the left side when it is not a variable.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let mut expression = parse_term(tokens)?;

    while tokens.next_if(|token| token.kind == TokenKind::Equals).is_some() {
        if !matches!(expression, Node::Variable { .. }) {
            return Err(Error::new(ErrorCode::NonVariableAssignment,
                                  expression.location(),
                                  "Only variables can be assigned."));
        }

        let value = parse_term(tokens)?;
        let location = expression.location().to(value.location());
        expression = Node::Assignment { target: Box::new(expression),
                                        value: Box::new(value),
                                        location };
    }

    Ok(expression)
}
