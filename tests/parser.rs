use symcalc::{
    ast::{BinaryOperator, Node, UnaryOperator},
    error::ErrorCode,
    interpreter::{lexer::tokenize, parser::core::parse},
    location::Location,
    parse_str,
};

fn parse_ok(source: &str) -> Node {
    parse_str(source).unwrap_or_else(|e| panic!("Failed to parse '{source}': {e}"))
}

fn parse_err(source: &str) -> (ErrorCode, Location) {
    match parse_str(source) {
        Ok(tree) => panic!("'{source}' parsed to '{tree}' but was expected to fail"),
        Err(e) => (e.code, e.location),
    }
}

fn num(text: &str) -> Node {
    Node::number(text)
}

fn var(name: &str) -> Node {
    Node::variable(name)
}

#[test]
fn precedence_of_binary_operators() {
    use BinaryOperator::*;

    assert_eq!(parse_ok("1 + 2 * 3"), Node::binary(Add, num("1"), Node::binary(Mul, num("2"), num("3"))));
    assert_eq!(parse_ok("1 - 2 - 3"), Node::binary(Sub, Node::binary(Sub, num("1"), num("2")), num("3")));
    assert_eq!(parse_ok("a * b ^ 2"),
               Node::binary(Mul, var("a"), Node::binary(Pow, var("b"), num("2"))));
    assert_eq!(parse_ok("6 / 3 % 2"), Node::binary(Mod, Node::binary(Div, num("6"), num("3")), num("2")));
}

#[test]
fn power_is_left_associative() {
    use BinaryOperator::Pow;

    assert_eq!(parse_ok("2 ^ 3 ^ 2"), Node::binary(Pow, Node::binary(Pow, num("2"), num("3")), num("2")));
}

#[test]
fn unary_binds_tighter_than_power() {
    assert_eq!(parse_ok("-x ^ 2"),
               Node::binary(BinaryOperator::Pow, Node::negate(var("x")), num("2")));
    assert_eq!(parse_ok("-+x"),
               Node::negate(Node::unary(UnaryOperator::Plus, var("x"))));
}

#[test]
fn unit_application() {
    let tree = parse_ok("3 km");

    assert_eq!(tree, Node::with_unit(num("3"), "km"));
    assert_eq!(tree.location(), Location::new(1, 5));
    assert_eq!(parse_ok("(1 + 2) m"),
               Node::with_unit(Node::binary(BinaryOperator::Add, num("1"), num("2")), "m"));
}

#[test]
fn function_calls() {
    let tree = parse_ok("foo(1, 2)");

    assert_eq!(tree, Node::call("foo", vec![num("1"), num("2")]));
    assert_eq!(tree.location(), Location::new(1, 10));
}

#[test]
fn group_location_covers_parentheses() {
    let tree = parse_ok("(1 + 2)");

    assert_eq!(tree.location(), Location::new(1, 8));
}

#[test]
fn composite_locations_span_their_tokens() {
    let Node::BinaryOp { left, right, location, .. } = parse_ok("a + b * c") else {
        panic!("expected a binary operation");
    };

    assert_eq!(location, Location::new(1, 10));
    assert_eq!(left.location(), Location::new(1, 2));
    assert_eq!(right.location(), Location::new(5, 10));
}

#[test]
fn assignment() {
    let tree = parse_ok("x = 2 * y");

    let Node::Assignment { target, value, .. } = &tree else {
        panic!("expected an assignment");
    };
    assert_eq!(**target, var("x"));
    assert_eq!(**value, Node::binary(BinaryOperator::Mul, num("2"), var("y")));
}

#[test]
fn assignment_requires_a_variable() {
    assert_eq!(parse_err("2 = 3"), (ErrorCode::NonVariableAssignment, Location::new(1, 2)));
    assert_eq!(parse_err("x = y = 3").0, ErrorCode::NonVariableAssignment);
}

#[test]
fn unclosed_parenthesis_points_at_the_opening() {
    assert_eq!(parse_err("(1+2"), (ErrorCode::UnclosedParentheses, Location::new(1, 2)));
    assert_eq!(parse_err("2 * ("), (ErrorCode::UnclosedParentheses, Location::new(5, 6)));
    assert_eq!(parse_err("f(1,"), (ErrorCode::UnclosedParentheses, Location::new(2, 3)));
}

#[test]
fn leftover_tokens() {
    assert_eq!(parse_err("1 + 2)"), (ErrorCode::PartialParse, Location::new(6, 7)));
    assert_eq!(parse_err("x y"), (ErrorCode::PartialParse, Location::new(3, 4)));
}

#[test]
fn unexpected_tokens() {
    assert_eq!(parse_err("f(1 2)"), (ErrorCode::UnexpectedToken, Location::new(5, 6)));
    assert_eq!(parse_err("f()"), (ErrorCode::UnexpectedToken, Location::new(3, 4)));
    assert_eq!(parse_err("* 2"), (ErrorCode::UnexpectedToken, Location::new(1, 2)));
    assert_eq!(parse_err("(1 2"), (ErrorCode::UnexpectedToken, Location::new(4, 5)));
}

#[test]
fn running_out_of_tokens_points_past_the_end() {
    assert_eq!(parse_err("1 +"), (ErrorCode::UnexpectedToken, Location::new(4, 5)));
}

#[test]
fn empty_token_list() {
    assert_eq!(parse(&[]).unwrap_err().code, ErrorCode::ParserGeneralError);
}

#[test]
fn tokenizer_errors_pass_through() {
    assert_eq!(parse_err("1.2.3").0, ErrorCode::MultipleDecimalDot);
}

#[test]
fn rendering_reparses_to_an_equal_tree() {
    let sources = ["1 + 2 * 3",
                   "(1 + 2) * 3",
                   "1 - (2 - 3)",
                   "2 ^ (3 ^ 2)",
                   "(2 ^ 3) ^ 2",
                   "-x ^ 2",
                   "-(x ^ 2)",
                   "-(a + b)",
                   "x = sin(2 * y) / (1 - cos(y))",
                   "log(x + 1, 2) % 3",
                   "(1 + 2) km * 3 deg",
                   "--x",
                   "a / (b * c)",
                   "a / b * c",
                   "0x1F + 0b101 - 017 * 2.5e-3"];

    for source in sources {
        let tree = parse_ok(source);
        let rendered = tree.to_expression_string();
        let reparsed = parse(&tokenize(&rendered).unwrap()).unwrap_or_else(|e| {
                           panic!("Rendering '{rendered}' of '{source}' does not parse: {e}")
                       });
        assert_eq!(reparsed, tree, "'{source}' rendered as '{rendered}'");
    }
}

#[test]
fn rendering_uses_minimal_parentheses() {
    assert_eq!(parse_ok("((1 + 2)) * (3)").to_string(), "(1 + 2) * 3");
    assert_eq!(parse_ok("a - (b + c)").to_string(), "a - (b + c)");
    assert_eq!(parse_ok("(a - b) + c").to_string(), "a - b + c");
}

#[test]
fn dump_indents_children() {
    let dump = parse_ok("f(x) + 2 m").dump();

    assert_eq!(dump,
               "BinaryOperator(+)\n  FunctionCall(f)\n    Variable(x)\n  UnitApplication()\n    \
                NumberLiteral(2)\n    Unit(m)\n");
}
