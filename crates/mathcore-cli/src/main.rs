//! `mathcore`: evaluate one Python `math` function call from the command line.
//!
//! ```bash
//! mathcore factorial 30
//! mathcore --json log 1000000000000000000000000000000 10
//! mathcore --trace -vv erf -inf
//! ```
//!
//! Options go before the operands: everything after the first operand is read
//! as an operand, so `-inf` and `-1+2j` need no escaping.

mod literal;

use std::{process::ExitCode, str::FromStr};

use clap::Parser;
use log::{debug, info};
use mathcore::{ArgValues, MathFunctions, StderrTracer, Value, call, call_traced};
use num_bigint::BigInt;
use num_traits::FromPrimitive;
use strum::IntoEnumIterator;

use crate::literal::parse_operand;

/// Exit code for calls refused before evaluation.
const EXIT_REFUSED: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "mathcore", version)]
#[command(about = "Evaluate a Python math module function", long_about = None)]
struct Cli {
    /// Function name as spelled in Python, e.g. `factorial`, `log2`, `erf`
    function: String,

    /// Operands as Python literals: `3`, `-2.5`, `1e300`, `inf`, `True`, `1+2j`, `'text'`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,

    /// Print each call and its outcome to stderr
    #[arg(long)]
    trace: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the result as JSON instead of its Python repr
    #[arg(long)]
    json: bool,

    /// Largest argument accepted by `factorial`
    #[arg(long, value_name = "N", default_value_t = 100_000)]
    max_factorial: u64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Ok(function) = MathFunctions::from_str(&cli.function) else {
        let known: Vec<&'static str> = MathFunctions::iter().map(Into::into).collect();
        eprintln!("error: unknown function '{}'", cli.function);
        eprintln!("available: {}", known.join(", "));
        return ExitCode::from(EXIT_REFUSED);
    };

    let mut operands = Vec::with_capacity(cli.args.len());
    for text in &cli.args {
        match parse_operand(text) {
            Ok(value) => operands.push(value),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::from(EXIT_REFUSED);
            }
        }
    }
    info!("{function}({} operands)", operands.len());

    if function == MathFunctions::Factorial
        && let Some(n) = operands.first().and_then(factorial_argument)
        && n > BigInt::from(cli.max_factorial)
    {
        eprintln!("error: factorial argument {n} exceeds --max-factorial {}", cli.max_factorial);
        return ExitCode::from(EXIT_REFUSED);
    }

    let args = ArgValues::from(operands);
    let result = if cli.trace {
        call_traced(function, args, &mut StderrTracer::new())
    } else {
        call(function, args)
    };

    match result {
        Ok(value) => {
            debug!("result: {value:?}");
            if cli.json {
                match serde_json::to_string(&value) {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        eprintln!("error: {err}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("{value}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// The integer `factorial` would compute on, if the operand denotes one.
fn factorial_argument(value: &Value) -> Option<BigInt> {
    match value {
        Value::Float(f) => BigInt::from_f64(f.trunc()),
        other => other.as_bigint(),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    if let Err(err) = simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("warning: could not install logger: {err}");
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_operands() {
        let cli = Cli::parse_from(["mathcore", "--json", "copysign", "2", "-0.0"]);
        assert_eq!(cli.function, "copysign");
        assert_eq!(cli.args, vec!["2", "-0.0"]);
        assert!(cli.json);
        assert_eq!(cli.max_factorial, 100_000);
    }

    #[test]
    fn parses_hyphenated_literals() {
        let cli = Cli::parse_from(["mathcore", "erf", "-inf"]);
        assert_eq!(cli.args, vec!["-inf"]);
        let cli = Cli::parse_from(["mathcore", "-v", "copysign", "-1+2j", "-2j"]);
        assert_eq!(cli.args, vec!["-1+2j", "-2j"]);
        assert_eq!(cli.verbose, 1);
        let cli = Cli::parse_from(["mathcore", "sqrt", "--trace", "-nan"]);
        assert!(cli.trace);
        assert_eq!(cli.args, vec!["-nan"]);
    }

    #[test]
    fn options_after_operands_are_operands() {
        let cli = Cli::parse_from(["mathcore", "erf", "0.5", "--json"]);
        assert!(!cli.json);
        assert_eq!(cli.args, vec!["0.5", "--json"]);
    }

    #[test]
    fn factorial_guard_reads_integral_operands() {
        assert_eq!(factorial_argument(&Value::Int(7)), Some(BigInt::from(7)));
        assert_eq!(factorial_argument(&Value::Float(1e6)), Some(BigInt::from(1_000_000)));
        assert_eq!(factorial_argument(&Value::Float(f64::NAN)), None);
        assert_eq!(factorial_argument(&Value::None), None);
    }
}
