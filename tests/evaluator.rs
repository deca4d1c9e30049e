use std::f64::consts::{E, PI};

use symcalc::{
    ast::Node,
    error::{Error, ErrorCode},
    evaluate_str,
    interpreter::{
        evaluator::{
            core::{SymbolTable, evaluate, evaluate_parse_time},
            function::core::{BUILTIN_FUNCTIONS, FunctionRegistry},
        },
        value::{quantity::Quantity, unit::MeasurementUnit},
    },
    location::Location,
    parse_str,
};

fn eval_with(source: &str, symbols: &mut SymbolTable) -> Result<Quantity, Error> {
    evaluate_str(source, symbols, &FunctionRegistry::with_builtins())
}

fn eval_ok(source: &str) -> Quantity {
    eval_with(source, &mut SymbolTable::with_constants()).unwrap_or_else(|e| {
                                                              panic!("Failed to evaluate '{source}': {e}")
                                                          })
}

fn eval_err(source: &str) -> Error {
    match eval_with(source, &mut SymbolTable::with_constants()) {
        Ok(value) => panic!("'{source}' evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_close(actual: Quantity, expected: Quantity) {
    assert_eq!(actual.unit, expected.unit, "{actual} != {expected}");
    assert!((actual.value - expected.value).abs() <= 1e-9, "{actual} != {expected}");
}

#[test]
fn arithmetic() {
    assert_eq!(eval_ok("1 + 2 * 3"), Quantity::scalar(7.0));
    assert_eq!(eval_ok("(1 + 2) * 3"), Quantity::scalar(9.0));
    assert_eq!(eval_ok("2 ^ 3 ^ 2"), Quantity::scalar(64.0));
    assert_eq!(eval_ok("-2 ^ 2"), Quantity::scalar(4.0));
    assert_eq!(eval_ok("10 % 3"), Quantity::scalar(1.0));
    assert_eq!(eval_ok("7 / 2"), Quantity::scalar(3.5));
    assert_eq!(eval_ok("+-3"), Quantity::scalar(-3.0));
}

#[test]
fn number_literals() {
    assert_eq!(eval_ok("0b101"), Quantity::scalar(5.0));
    assert_eq!(eval_ok("017"), Quantity::scalar(15.0));
    assert_eq!(eval_ok("0x1F"), Quantity::scalar(31.0));
    assert_eq!(eval_ok("2.5e2"), Quantity::scalar(250.0));
    assert_eq!(eval_ok("0"), Quantity::scalar(0.0));

    let error = eval_err("1 + 09");
    assert_eq!(error.code, ErrorCode::FailedToEvaluateOperand);
    assert_eq!(error.root_cause().code, ErrorCode::InvalidNumberLiteral);
    assert_eq!(error.root_cause().location, Location::new(5, 7));
}

#[test]
fn units_convert_to_base_units() {
    assert_close(eval_ok("3 km + 500 m"), Quantity::length(3500.0));
    assert_close(eval_ok("25 mm + 2 cm"), Quantity::length(0.045));
    assert_close(eval_ok("180 deg"), Quantity::angle(PI));
    assert_close(eval_ok("-3 km"), Quantity::length(-3000.0));
}

#[test]
fn dimensions_combine() {
    let area = eval_ok("1 mm * 1 km");
    assert!(area.is_area());
    assert_close(area, Quantity::new(MeasurementUnit::area(), 1.0));

    assert!(eval_ok("(2 m) ^ 3").is_volume());
    assert!(eval_ok("6 m / 2 m").is_scalar());
    assert!(eval_ok("2 m * 3 rad").is_mixed());
    assert_eq!(eval_ok("1 / 2 m").unit, MeasurementUnit::new(-1, 0));
}

#[test]
fn dimension_mismatch() {
    let error = eval_err("3 m + 2");
    assert_eq!(error.code, ErrorCode::InvalidBinaryOperation);
    assert_eq!(error.location, Location::new(7, 8));

    assert_eq!(eval_err("3 m - 2 rad").code, ErrorCode::InvalidBinaryOperation);
    assert_eq!(eval_err("5 m % 2").code, ErrorCode::ExpectedSameUnit);
}

#[test]
fn division_by_zero() {
    let error = eval_err("3 m / 0 m");
    assert_eq!(error.code, ErrorCode::DivisionByZero);
    assert_eq!(error.location, Location::new(7, 10));
}

#[test]
fn powers_need_dimensionless_integer_exponents() {
    assert_eq!(eval_err("2 ^ 0.5").code, ErrorCode::ScalarIntegerExpectedAsPower);
    assert_eq!(eval_err("2 ^ 1 m").code, ErrorCode::ScalarIntegerExpectedAsPower);
    assert_eq!(eval_ok("2 ^ -1"), Quantity::scalar(0.5));
}

#[test]
fn dimension_powers_out_of_range() {
    let sources = ["(1 m) ^ 2000000000 * (1 m) ^ 2000000000",
                   "1 / (1 m) ^ 2000000000 / (1 m) ^ 2000000000",
                   "(1 m) ^ 2 ^ 2000000000",
                   "((1 m) ^ 2147483647) m"];
    for source in sources {
        assert_eq!(eval_err(source).code, ErrorCode::DimensionOverflow, "'{source}'");

        let tree = parse_str(source).unwrap();
        assert_eq!(evaluate_parse_time(&tree).unwrap_err().code, ErrorCode::DimensionOverflow);
    }

    let source = "(1 m) ^ 2000000000 * (1 m) ^ 2000000000";
    let optimized = symcalc::optimize_str(source).unwrap();
    assert_eq!(evaluate_parse_time(&optimized).unwrap_err().code, ErrorCode::DimensionOverflow);
    assert!(symcalc::derive_str(&format!("x * {source}"), "x").is_ok());
}

#[test]
fn undefined_variable() {
    let mut symbols = SymbolTable::new();
    let error = eval_with("y", &mut symbols).unwrap_err();

    assert_eq!(error.code, ErrorCode::UndefinedVariable);
    assert_eq!(error.location, Location::new(1, 2));
}

#[test]
fn failed_operand_keeps_the_cause() {
    let error = eval_err("1 + y");

    assert_eq!(error.code, ErrorCode::FailedToEvaluateOperand);
    assert_eq!(error.location, Location::new(1, 6));
    assert_eq!(error.root_cause().code, ErrorCode::UndefinedVariable);
    assert_eq!(error.root_cause().location, Location::new(5, 6));
    assert!(std::error::Error::source(&error).is_some());

    assert_eq!(eval_err("-y").code, ErrorCode::FailedToEvaluateOperand);
}

#[test]
fn constants() {
    assert_close(eval_ok("pi"), Quantity::scalar(PI));
    assert_close(eval_ok("e"), Quantity::scalar(E));
    assert!(SymbolTable::new().is_empty());
    assert_eq!(SymbolTable::with_constants().len(), 2);
}

#[test]
fn assignment_updates_the_symbol_table() {
    let mut symbols = SymbolTable::new();

    assert_eq!(eval_with("r = 5 m", &mut symbols).unwrap(), Quantity::length(5.0));
    assert!(symbols.contains("r"));
    assert_eq!(eval_with("r * 2", &mut symbols).unwrap(), Quantity::length(10.0));

    eval_with("r = r / 5 m", &mut symbols).unwrap();
    assert_eq!(symbols.get("r"), Some(&Quantity::scalar(1.0)));
}

#[test]
fn failed_assignment_leaves_the_table_untouched() {
    let mut symbols = SymbolTable::new();
    let error = eval_with("x = y", &mut symbols).unwrap_err();

    assert_eq!(error.code, ErrorCode::FailedToEvaluateArguments);
    assert_eq!(error.root_cause().code, ErrorCode::UndefinedVariable);
    assert!(!symbols.contains("x"));
}

#[test]
fn trigonometric_functions() {
    assert_close(eval_ok("sin(90 deg)"), Quantity::scalar(1.0));
    assert_close(eval_ok("cos(0)"), Quantity::scalar(1.0));
    assert_close(eval_ok("tan(pi / 4)"), Quantity::scalar(1.0));
    assert_close(eval_ok("ctg(pi / 4)"), Quantity::scalar(1.0));
    assert_close(eval_ok("sec(0)"), Quantity::scalar(1.0));
    assert_close(eval_ok("csc(90 deg)"), Quantity::scalar(1.0));
}

#[test]
fn rounding_keeps_the_unit() {
    assert_eq!(eval_ok("round(2.5)"), Quantity::scalar(3.0));
    assert_eq!(eval_ok("floor(1.5 km)"), Quantity::length(1500.0));
    assert_eq!(eval_ok("ceil(-1.5)"), Quantity::scalar(-1.0));
    assert_eq!(eval_ok("abs(-2 m)"), Quantity::length(2.0));
}

#[test]
fn sign() {
    assert_eq!(eval_ok("sgn(-0.5)"), Quantity::scalar(-1.0));
    assert_eq!(eval_ok("sgn(3 m)"), Quantity::scalar(1.0));
    assert_eq!(eval_ok("sgn(0)"), Quantity::scalar(0.0));
}

#[test]
fn logarithms() {
    assert_close(eval_ok("ln(e)"), Quantity::scalar(1.0));
    assert_close(eval_ok("log2(8)"), Quantity::scalar(3.0));
    assert_close(eval_ok("log10(1000)"), Quantity::scalar(3.0));
    assert_close(eval_ok("log(81, 3)"), Quantity::scalar(4.0));
    assert_eq!(eval_err("ln(2 m)").code, ErrorCode::WrongArgumentType);
}

#[test]
fn function_argument_checks() {
    let error = eval_err("sin(1 m)");
    assert_eq!(error.code, ErrorCode::WrongArgumentType);
    assert_eq!(error.location, Location::new(1, 9));

    let error = eval_err("sin(1, 2)");
    assert_eq!(error.code, ErrorCode::WrongArgumentCount);
    assert_eq!(error.description, "function sin(x) takes 1 argument(s)");

    assert_eq!(eval_err("log(8)").code, ErrorCode::WrongArgumentCount);
}

#[test]
fn undefined_function_points_at_the_name() {
    let error = eval_err("2 * foo(1)");

    assert_eq!(error.root_cause().code, ErrorCode::UndefinedFunction);
    assert_eq!(error.root_cause().location, Location::new(5, 8));
}

#[test]
fn failed_argument() {
    let error = eval_err("sin(y)");

    assert_eq!(error.code, ErrorCode::FailedToEvaluateArguments);
    assert_eq!(error.location, Location::new(1, 7));
    assert_eq!(error.root_cause().location, Location::new(5, 6));
}

#[test]
fn custom_registry() {
    fn twice(args: &[Quantity], _: Location) -> symcalc::error::Result<Quantity> {
        Ok(Quantity::new(args[0].unit, args[0].value * 2.0))
    }

    let mut functions = FunctionRegistry::new();
    assert!(functions.is_empty());
    functions.register("twice", twice, "twice(x)");

    let tree = parse_str("twice(3 m)").unwrap();
    let result = evaluate(&tree, &mut SymbolTable::new(), &functions).unwrap();
    assert_eq!(result, Quantity::length(6.0));
    assert!(!functions.contains("sin"));
}

#[test]
fn builtin_registry_is_complete() {
    let functions = FunctionRegistry::with_builtins();

    for name in BUILTIN_FUNCTIONS {
        assert!(functions.contains(name), "missing builtin '{name}'");
    }
    assert_eq!(functions.len(), 15);
}

#[test]
fn parse_time_evaluation() {
    assert_eq!(evaluate_parse_time(&parse_str("2 + 3").unwrap()).unwrap(), Quantity::scalar(5.0));
    assert_eq!(evaluate_parse_time(&parse_str("x").unwrap()).unwrap_err().code,
               ErrorCode::UndefinedVariable);
    assert_eq!(evaluate_parse_time(&parse_str("sin(0)").unwrap()).unwrap_err().code,
               ErrorCode::UndefinedFunction);
}

#[test]
fn bare_unit_is_unreachable() {
    let unit = Node::Unit { name:     "m".to_string(),
                            location: Location::new(1, 2), };

    assert_eq!(evaluate_parse_time(&unit).unwrap_err().code, ErrorCode::ReachedUnreachableCodePath);
}

#[test]
fn quantity_display() {
    assert_eq!(Quantity::length(2.0).to_string(), "2 m");
    assert_eq!(eval_ok("2 m * 2 m").to_string(), "4 m^2");
    assert_eq!(eval_ok("1 rad").to_string(), "1 rad");
    assert_eq!(eval_ok("3").to_string(), "3");
}
