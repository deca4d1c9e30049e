/// The lexer module turns source text into tokens.
///
/// The lexer reads the raw text and produces the ordered list of tokens the
/// parser consumes: numbers, identifiers, unit suffixes, operators and
/// delimiters, each with its 1-based source span.
///
/// # Responsibilities
/// - Scans numeric literals incrementally (decimal, scientific, `0x`, `0b`).
/// - Tells unit suffixes apart from identifiers.
/// - Reports empty input and malformed decimal literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser over the grammar
/// assignment > term > factor > power > unary > unit application > primary.
/// Every node it builds spans its first to its last token.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Evaluation yields a [`value::quantity::Quantity`]: a number together with
/// its length and angle dimensions.
pub mod value;
/// The evaluator module computes the value of an AST.
///
/// The evaluator traverses the AST against a symbol table and a function
/// registry, checks dimensions and produces a quantity.
///
/// # Responsibilities
/// - Evaluates literals, variables, operators, calls and unit applications.
/// - Writes assignments to the symbol table.
/// - Reports failures with the location of the offending subexpression.
pub mod evaluator;
/// The optimizer module simplifies expression trees.
///
/// Folds constant subtrees into literals and applies algebraic identities
/// such as `x * 1 = x` and `x - x = 0`.
pub mod optimizer;
/// The derivator module differentiates expression trees symbolically.
pub mod derivator;
