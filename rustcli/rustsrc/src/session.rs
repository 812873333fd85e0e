use std::io::{BufRead, Write};

use calculator::{is_undefined, parse_operand, Expression, Float, Operator};

use crate::CliError;

pub const DIVISION_BY_ZERO: &str = "Error! Division by zero";

const QUIT_COMMANDS: [&str; 3] = ["quit", "exit", "q"];

pub fn format_result(a: Float, op: Operator, b: Float, result: Float) -> String {
    format!("{a:.2} {op} {b:.2} = {result:.2}")
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
    what: &'static str,
) -> Result<String, CliError> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::UnexpectedEof(what));
    }
    Ok(line)
}

/// Reads an operator and two operands, then prints one result line.
///
/// Any malformed value ends the session with an error; nothing is re-prompted.
pub fn run_prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<(), CliError> {
    let op: Operator = prompt(input, out, "Enter the Operator (+, -, *, /): ", "operator")?.parse()?;
    let a = parse_operand(&prompt(input, out, "Enter First Number: ", "first number")?)?;
    let b = parse_operand(&prompt(input, out, "Enter Second Number: ", "second number")?)?;

    let result = op.apply(a, b);
    tracing::debug!(%op, a, b, result, "computed");

    if op == Operator::Divide && is_undefined(result) {
        writeln!(out, "{DIVISION_BY_ZERO}")?;
    } else {
        writeln!(out, "{}", format_result(a, op, b, result))?;
    }
    Ok(())
}

/// Evaluates one expression given on the command line.
pub fn run_expression<W: Write>(expression: &str, out: &mut W) -> Result<(), CliError> {
    let result = expression.parse::<Expression>()?.evaluate()?;
    writeln!(out, "{} = {}", expression.trim(), result)?;
    Ok(())
}

/// Evaluates one expression per line until a quit command or end of input.
pub fn run_repl<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<(), CliError> {
    writeln!(out, "Calculator - Interactive Mode")?;
    writeln!(out, "Enter expressions like '2 + 3' or 'quit' to exit")?;

    loop {
        let line = match prompt(input, out, "> ", "expression") {
            Ok(line) => line,
            Err(CliError::UnexpectedEof(_)) => break,
            Err(e) => return Err(e),
        };
        let line = line.trim();
        if QUIT_COMMANDS.contains(&line.to_lowercase().as_str()) {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match line.parse::<Expression>().and_then(|expr| expr.evaluate()) {
            Ok(result) => writeln!(out, "= {result}")?,
            Err(e) => writeln!(out, "Error: {e}")?,
        }
    }

    writeln!(out, "Goodbye!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(2.0, Operator::Add, 3.0, 5.0), "2.00 + 3.00 = 5.00");
        assert_eq!(
            format_result(1.0, Operator::Divide, 3.0, 1.0 / 3.0),
            "1.00 / 3.00 = 0.33"
        );
        assert_eq!(
            format_result(-2.0, Operator::Subtract, 1.0, -3.0),
            "-2.00 - 1.00 = -3.00"
        );
    }
}
