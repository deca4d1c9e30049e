use std::fmt;

use log::{debug, trace};
use logos::Logos;

use crate::{
    error::{Error, ErrorCode, Result},
    interpreter::value::unit::is_unit_suffix,
    location::Location,
};

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric literal such as `42`, `3.5e-2`, `0x1F` or `0b101`.
    Number,
    /// Variable or function name.
    Identifier,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `/`
    Slash,
    /// `*`
    Asterisk,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,`
    Comma,
    /// `=`
    Equals,
    /// One of the unit suffixes `mm cm m km rad deg`.
    Unit,
}

/// A token together with its source text and span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What was recognized.
    pub kind:     TokenKind,
    /// The exact source text.
    pub text:     String,
    /// 1-based span of `text` in the source.
    pub location: Location,
}

/// An ordered list of tokens as produced by [`tokenize`].
pub type TokenList = Vec<Token>;

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}('{}') at {}", self.kind, self.text, self.location)
    }
}

/// Failures raised inside the scanner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum LexError {
    /// A character that starts no token; it is skipped.
    #[default]
    Unrecognized,
    /// A second decimal point, at the given byte offset.
    MultipleDecimalDot(usize),
}

/// The raw scanner. Words are classified by their callback and numbers are
/// scanned incrementally, one accepted character at a time.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token(",")]
    Comma,
    #[token("=")]
    Equals,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", classify_word)]
    Word(TokenKind),
    #[regex(r"[0-9]", scan_number)]
    Number,
}

impl RawToken {
    const fn kind(self) -> TokenKind {
        match self {
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Asterisk => TokenKind::Asterisk,
            Self::Slash => TokenKind::Slash,
            Self::Percent => TokenKind::Percent,
            Self::Caret => TokenKind::Caret,
            Self::OpenParen => TokenKind::OpenParen,
            Self::CloseParen => TokenKind::CloseParen,
            Self::Comma => TokenKind::Comma,
            Self::Equals => TokenKind::Equals,
            Self::Word(kind) => kind,
            Self::Number => TokenKind::Number,
        }
    }
}

/// Classifies a word as a unit suffix or an identifier.
fn classify_word(lex: &logos::Lexer<RawToken>) -> TokenKind {
    if is_unit_suffix(lex.slice()) { TokenKind::Unit } else { TokenKind::Identifier }
}

/// Extends a number token that starts with a single digit.
///
/// Characters are accepted while they continue a valid literal (see
/// [`continues_number`]); the first character that does not is left for the
/// next token, except for a second `.` in a decimal literal, which is an
/// error. A `.` after a hexadecimal, binary or exponent form ends the literal.
fn scan_number(lex: &mut logos::Lexer<RawToken>) -> std::result::Result<(), LexError> {
    let start = lex.span().start;
    let mut content = lex.slice().to_string();

    for current in lex.remainder().chars() {
        if continues_number(&content, current) {
            content.push(current);
        } else if current == '.' && content.contains('.') {
            return Err(LexError::MultipleDecimalDot(start + content.len()));
        } else {
            break;
        }
    }

    lex.bump(content.len() - 1);
    Ok(())
}

/// Returns `true` when `current` may follow `content` inside one literal.
///
/// Accepted forms: `0x` followed by hex digits, `0b` followed by binary
/// digits, and decimal digits with at most one `.` and at most one exponent
/// marker (`e`/`E`), which may be directly followed by one sign.
fn continues_number(content: &str, current: char) -> bool {
    if content == "0" && matches!(current, 'x' | 'b') {
        return true;
    }
    if content.starts_with("0b") {
        return matches!(current, '0' | '1');
    }
    if content.starts_with("0x") {
        return current.is_ascii_hexdigit();
    }

    let has_exponent = content.contains(['e', 'E']);
    match current {
        'e' | 'E' => !has_exponent,
        '+' | '-' => content.ends_with(['e', 'E']),
        '.' => !has_exponent && !content.contains('.'),
        _ => current.is_ascii_digit(),
    }
}

/// Converts a byte offset into a 1-based character offset.
fn char_offset(source: &str, byte: usize) -> usize {
    source[..byte].chars().count() + 1
}

/// Splits `source` into tokens.
///
/// Whitespace separates tokens and is otherwise ignored, as are characters
/// that start no token. Locations are 1-based character offsets.
///
/// # Errors
/// - `EmptyInput` if no token was produced.
/// - `MultipleDecimalDot` at the offending `.` of a literal like `1.2.3`.
///
/// # Example
/// ```
/// use symcalc::{
///     error::ErrorCode,
///     interpreter::lexer::{TokenKind, tokenize},
/// };
///
/// let tokens = tokenize("2 km + x").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Number, TokenKind::Unit, TokenKind::Plus, TokenKind::Identifier]);
///
/// assert_eq!(tokenize("   ").unwrap_err().code, ErrorCode::EmptyInput);
/// ```
pub fn tokenize(source: &str) -> Result<TokenList> {
    let mut tokens = TokenList::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(raw) = lexer.next() {
        let span = lexer.span();
        match raw {
            Ok(raw) => {
                let location = Location::new(char_offset(source, span.start),
                                             char_offset(source, span.end));
                tokens.push(Token { kind: raw.kind(),
                                    text: lexer.slice().to_string(),
                                    location });
            },
            Err(LexError::MultipleDecimalDot(byte)) => {
                let begin = char_offset(source, byte);
                return Err(Error::new(ErrorCode::MultipleDecimalDot,
                                      Location::new(begin, begin + 1),
                                      "Multiple decimal dots present in numeric literal."));
            },
            Err(LexError::Unrecognized) => {
                trace!("skipping unrecognized input '{}' at byte {}", lexer.slice(), span.start);
            },
        }
    }

    if tokens.is_empty() {
        return Err(Error::new(ErrorCode::EmptyInput,
                              Location::SYNTHETIC,
                              "Expression resulted in an empty token stream."));
    }

    debug!("tokenized {} token(s)", tokens.len());
    Ok(tokens)
}
