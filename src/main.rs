use std::io::{self, BufRead};

use clap::Parser;
use env_logger::Env;
use symcalc::{
    ast::Node,
    error::{Error, Result},
    interpreter::{
        derivator::core::derive,
        evaluator::{
            core::{SymbolTable, evaluate},
            function::core::FunctionRegistry,
        },
        lexer::tokenize,
        optimizer::core::optimize,
        parser::core::parse,
    },
};

const SEPARATOR_WIDTH: usize = 80;

/// symcalc parses, simplifies, differentiates and evaluates arithmetic
/// expressions with lengths and angles.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Variable to differentiate with respect to.
    #[arg(short = 'x', long, default_value = "x")]
    variable: String,

    /// Log filter, e.g. `debug` or `symcalc=trace`. Overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Prints the available functions and exits.
    #[arg(long)]
    list_functions: bool,

    /// Expressions to process. One expression per line is read from standard
    /// input when none is given.
    expressions: Vec<String>,
}

/// Process-wide state shared by every processed expression.
struct Session {
    symbols:   SymbolTable,
    functions: FunctionRegistry,
    variable:  String,
}

fn separator(step: &str) {
    let dashes = SEPARATOR_WIDTH.saturating_sub(step.len() + 5);
    println!("--- {step} {}\n", "-".repeat(dashes));
}

/// Prints the expression with the span of the innermost error underlined.
fn report(expression: &str, action: &str, error: &Error) {
    let location = error.root_cause().location;
    let underline: String =
        (1..=expression.chars().count()).map(|i| {
                                            if i >= location.begin && i < location.end {
                                                '^'
                                            } else {
                                                ' '
                                            }
                                        })
                                        .collect();
    println!("{expression}");
    println!("{}", underline.trim_end());
    println!("Failed to {action}: {error} (code {})", error.code);
}

/// Prints the outcome of one stage and passes it through.
fn stage<T>(expression: &str, action: &str, result: Result<T>, show: impl Fn(&T)) -> Option<T> {
    match result {
        Ok(value) => {
            show(&value);
            Some(value)
        },
        Err(error) => {
            report(expression, action, &error);
            None
        },
    }
}

impl Session {
    fn evaluate_and_print(&mut self, tree: &Node, tree_kind: &str) {
        println!("Recreated expression string from {tree_kind} syntax tree: '{tree}'.");
        match evaluate(tree, &mut self.symbols, &self.functions) {
            Ok(value) => println!("Evaluation result: {value}\n"),
            Err(error) => println!("Failed to evaluate: {error}\n"),
        }
    }

    fn process(&mut self, expression: &str) {
        separator("Tokenization");
        let Some(tokens) = stage(expression, "tokenize input", tokenize(expression), |tokens| {
                               for token in tokens {
                                   println!("{token}");
                               }
                               println!();
                           })
        else {
            return;
        };

        separator("Parsing");
        let Some(parsed) =
            stage(expression, "parse tokens", parse(&tokens), |tree| print!("{}", tree.dump()))
        else {
            return;
        };
        self.evaluate_and_print(&parsed, "parsed");

        separator("Optimization");
        if let Some(optimized) = stage(expression,
                                       "optimize expression tree",
                                       optimize(parsed.clone()),
                                       |tree| print!("{}", tree.dump()))
        {
            self.evaluate_and_print(&optimized, "optimized");
        }

        separator("Derivation");
        if let Some(derived) = stage(expression,
                                     "derive expression",
                                     derive(&parsed, &self.variable),
                                     |tree| print!("{}", tree.dump()))
        {
            self.evaluate_and_print(&derived, "derived");
        }
    }
}

fn main() {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(filter) = &args.log_level {
        logger.parse_filters(filter);
    }
    logger.init();

    let functions = FunctionRegistry::with_builtins();

    if args.list_functions {
        let mut signatures: Vec<_> = functions.iter().map(|(_, f)| f.signature).collect();
        signatures.sort_unstable();
        for signature in signatures {
            println!("{signature}");
        }
        return;
    }

    let mut session = Session { symbols: SymbolTable::with_constants(),
                                functions,
                                variable: args.variable };

    if !args.expressions.is_empty() {
        for expression in &args.expressions {
            session.process(expression);
        }
        return;
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read standard input: {e}");
                std::process::exit(1);
            },
        };
        if line.trim().is_empty() {
            continue;
        }
        session.process(&line);
    }
}
