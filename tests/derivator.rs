use symcalc::{
    ast::Node,
    derive_str,
    error::ErrorCode,
    interpreter::{
        derivator::core::derive,
        optimizer::core::optimize,
        evaluator::{
            core::{SymbolTable, evaluate},
            function::core::FunctionRegistry,
        },
        value::quantity::Quantity,
    },
    location::Location,
};

fn derived(source: &str) -> String {
    derive_str(source, "x").unwrap_or_else(|e| panic!("Failed to derive '{source}': {e}"))
                           .to_string()
}

fn derivative_at(source: &str, x: f64) -> Quantity {
    let derivative = derive_str(source, "x").unwrap();
    let mut symbols = SymbolTable::with_constants();
    symbols.set("x", Quantity::scalar(x));
    evaluate(&derivative, &mut symbols, &FunctionRegistry::with_builtins())
        .unwrap_or_else(|e| panic!("Failed to evaluate d/dx '{source}' = '{derivative}': {e}"))
}

fn assert_slope(source: &str, x: f64, expected: f64) {
    let slope = derivative_at(source, x);
    assert!(slope.is_scalar(), "d/dx '{source}' is not dimensionless: {slope}");
    assert!((slope.value - expected).abs() <= 1e-9,
            "d/dx '{source}' at {x} is {}, expected {expected}",
            slope.value);
}

#[test]
fn leaves() {
    assert_eq!(derive_str("5", "x").unwrap(), Node::number("0"));
    assert_eq!(derive_str("x", "x").unwrap(), Node::number("1"));
    assert_eq!(derive_str("y", "x").unwrap(), Node::number("0"));
    assert_eq!(derive_str("x + y", "y").unwrap(), Node::number("1"));
}

#[test]
fn sums_and_negation() {
    assert_eq!(derived("x + 3"), "1");
    assert_eq!(derived("x - y"), "1");
    assert_eq!(derived("-x"), "-1");
}

#[test]
fn constant_factors() {
    assert_eq!(derived("3 * x"), "3");
    assert_eq!(derived("x * 3"), "3");
    assert_eq!(derived("(1 + 2) * x"), "3");
    assert_eq!(derived("x / 2"), "0.5");
}

#[test]
fn product_and_quotient_rules() {
    assert_eq!(derived("x * sin(x)"), "sin(x) + x * cos(x)");
    // d/dx c/g takes the full quotient rule, not the c / g' shortcut, and
    // every function rule is multiplied by its argument's derivative.
    assert_eq!(derived("1 / x"), "-1 / x ^ 2");
    assert_slope("x * x", 3.0, 6.0);
    assert_slope("(x + 1) / (x - 1)", 3.0, -0.5);
    assert_slope("x ^ 2 / (x + 1)", 1.0, 0.75);
}

#[test]
fn constant_division_by_zero_is_not_simplified() {
    assert_eq!(derived("5 / 0"), "0 / 0");
    assert_eq!(derived("x / 0"), "1 / 0");
}

#[test]
fn powers_with_literal_exponents() {
    assert_eq!(derived("x ^ 2"), "2 * x");
    assert_eq!(derived("x ^ 3"), "3 * x ^ 2");
    assert_slope("x ^ 3", 2.0, 12.0);
    assert_slope("(2 * x + 1) ^ 2", 1.0, 12.0);
}

#[test]
fn powers_with_constant_base() {
    assert_eq!(derived("2 ^ x"), "2 ^ x * ln(2)");
    assert_slope("2 ^ x", 3.0, 8.0 * 2f64.ln());
}

#[test]
fn variable_exponent_ignores_the_exponents_own_derivative() {
    // d/dx x^x is x^x * (ln(x) + 1); only the first term is produced.
    assert_eq!(derived("x ^ x"), "x ^ x * ln(x)");
    assert_slope("x ^ x", 2.0, 4.0 * 2f64.ln());
}

#[test]
fn functions() {
    assert_eq!(derived("sin(x)"), "cos(x)");
    assert_eq!(derived("cos(x)"), "-sin(x)");
    assert_eq!(derived("tan(x)"), "1 / cos(x) ^ 2");
    assert_eq!(derived("ctg(x)"), "-(1 / sin(x) ^ 2)");
    assert_eq!(derived("sec(x)"), "sec(x) * tan(x)");
    assert_eq!(derived("csc(x)"), "-(csc(x) * ctg(x))");
    assert_eq!(derived("ln(x)"), "1 / x");
    assert_eq!(derived("log2(x)"), "1 / ln(2) * (1 / x)");
    assert_eq!(derived("log10(x)"), "1 / ln(10) * (1 / x)");
    assert_eq!(derived("log(x, 3)"), "1 / ln(3) * (1 / x)");
    assert_eq!(derived("log(x, 1 + 1)"), "1 / ln(2) * (1 / x)");
}

#[test]
fn function_derivatives_are_correct() {
    assert_slope("sin(x)", 0.0, 1.0);
    assert_slope("cos(x)", 0.5, -0.5f64.sin());
    assert_slope("tan(x)", 0.5, 1.0 / 0.5f64.cos().powi(2));
    assert_slope("ctg(x)", 0.5, -1.0 / 0.5f64.sin().powi(2));
    assert_slope("sec(x)", 0.5, 0.5f64.tan() / 0.5f64.cos());
    assert_slope("csc(x)", 0.5, -1.0 / (0.5f64.sin() * 0.5f64.tan()));
    assert_slope("ln(x)", 4.0, 0.25);
    assert_slope("log2(x)", 4.0, 1.0 / (4.0 * 2f64.ln()));
    assert_slope("log(x, 10)", 4.0, 1.0 / (4.0 * 10f64.ln()));
}

#[test]
fn chain_rule() {
    assert_eq!(derived("sin(2 * x)"), "cos(2 * x) * 2");
    assert_slope("ln(x ^ 2)", 2.0, 1.0);
    assert_slope("sin(x ^ 2)", 1.0, 2.0 * 1f64.cos());
}

#[test]
fn assignments_derive_their_value() {
    assert_eq!(derived("y = x ^ 2"), "2 * x");
}

#[test]
fn units_are_constant_factors() {
    assert_eq!(derived("x km"), "1000 m");
    assert_eq!(derived("2 km * x"), "2000 m");
    assert!(derivative_at("3 m * x ^ 2", 1.0).is_length());
}

#[test]
fn non_derivable_functions() {
    for source in ["round(x)", "floor(x)", "ceil(x)", "abs(x)", "sgn(x)"] {
        let error = derive_str(source, "x").unwrap_err();
        assert_eq!(error.code, ErrorCode::FunctionNotDerivable, "'{source}'");
    }
}

#[test]
fn unknown_function() {
    let error = derive_str("1 + foo(x)", "x").unwrap_err();

    assert_eq!(error.code, ErrorCode::DerivatorGeneralError);
    assert_eq!(error.location, Location::new(5, 11));
}

#[test]
fn modulo_is_not_derivable() {
    assert_eq!(derive_str("x % 2", "x").unwrap_err().code, ErrorCode::DerivatorGeneralError);
}

#[test]
fn wrong_argument_count() {
    assert_eq!(derive_str("sin(x, 1)", "x").unwrap_err().code, ErrorCode::DerivatorWrongArgumentCount);
    assert_eq!(derive_str("log(x)", "x").unwrap_err().code, ErrorCode::DerivatorWrongArgumentCount);
}

#[test]
fn logarithm_base_must_be_constant() {
    assert_eq!(derive_str("log(x, y)", "x").unwrap_err().code, ErrorCode::CantBeDoneAtParseTime);
}

#[test]
fn bare_unit() {
    let unit = Node::Unit { name:     "km".to_string(),
                            location: Location::new(1, 3), };

    assert_eq!(derive(&unit, "x").unwrap_err().code, ErrorCode::DerivatorGeneralError);
}

#[test]
fn derivatives_are_optimized() {
    for source in ["x * sin(x)", "x ^ 3 + 2 * x", "(x + 1) / (x - 1)", "log(x, 2)"] {
        let derivative = derive_str(source, "x").unwrap();
        let again = optimize(derivative.clone()).unwrap();
        assert_eq!(again, derivative, "'{source}'");
    }
}
