//! calculator-cli: four-function calculator for the terminal.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use calculator_cli::{logging, session, CliError};

/// Four-function calculator
#[derive(Parser, Debug)]
#[command(name = "calculator-cli")]
#[command(about = "Prompts for an operator and two numbers, or evaluates an expression")]
struct Args {
    /// Expression to evaluate once, e.g. "2 + 3"
    expression: Option<String>,

    /// Evaluate expressions line by line until `quit`
    #[arg(short, long, conflicts_with = "expression")]
    interactive: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "CALCULATOR_LOG", default_value = "warn")]
    log_level: String,
}

fn run(args: Args) -> Result<(), CliError> {
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    if args.interactive {
        session::run_repl(&mut input, &mut out)
    } else if let Some(expression) = args.expression {
        session::run_expression(&expression, &mut out)
    } else {
        session::run_prompt(&mut input, &mut out)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(&args.log_level) {
        eprintln!("Warning: {}", e);
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
