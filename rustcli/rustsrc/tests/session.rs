use std::io::Cursor;

use calculator::CalcError;
use calculator_cli::session::{run_expression, run_prompt, run_repl, DIVISION_BY_ZERO};
use calculator_cli::CliError;

fn prompt_session(input: &str) -> (Result<(), CliError>, String) {
    let mut out = Vec::new();
    let res = run_prompt(&mut Cursor::new(input), &mut out);
    (res, String::from_utf8(out).unwrap())
}

#[test]
fn prompt_prints_formatted_result() {
    let (res, out) = prompt_session("+\n2\n3\n");
    assert!(res.is_ok());
    assert!(out.starts_with("Enter the Operator (+, -, *, /): "));
    assert!(out.ends_with("2.00 + 3.00 = 5.00\n"));

    let (res, out) = prompt_session("*\n1.005\n-4\n");
    assert!(res.is_ok());
    assert!(out.contains(" * -4.00 = "));
}

#[test]
fn prompt_division_by_zero_prints_error_line_only() {
    let (res, out) = prompt_session("/\n5\n0\n");
    assert!(res.is_ok());
    assert!(out.ends_with(&format!("{DIVISION_BY_ZERO}\n")));
    assert!(!out.contains(" = "));
}

#[test]
fn prompt_rejects_invalid_operator_before_operands() {
    let (res, out) = prompt_session("&\n");
    match res {
        Err(CliError::Calc(e @ CalcError::InvalidOperator(_))) => {
            assert!(e.to_string().starts_with("Invalid operator"));
        }
        other => panic!("expected invalid operator, got {other:?}"),
    }
    assert!(!out.contains("First Number"));
}

#[test]
fn prompt_rejects_invalid_number() {
    let (res, _) = prompt_session("+\n2\nthree\n");
    assert!(matches!(
        res,
        Err(CliError::Calc(CalcError::InvalidNumber(ref s))) if s == "three"
    ));
}

#[test]
fn prompt_reports_truncated_input() {
    let (res, _) = prompt_session("-\n4\n");
    assert!(matches!(res, Err(CliError::UnexpectedEof("second number"))));

    let (res, _) = prompt_session("");
    assert!(matches!(res, Err(CliError::UnexpectedEof("operator"))));
}

#[test]
fn expression_mode() {
    let mut out = Vec::new();
    run_expression(" 6 / 3 ", &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "6 / 3 = 2\n");

    let mut out = Vec::new();
    let res = run_expression("5/0", &mut out);
    assert!(matches!(res, Err(CliError::Calc(CalcError::DivisionByZero))));
    assert!(out.is_empty());
}

#[test]
fn repl_evaluates_until_quit() {
    let input = "2 + 3\n\n5/0\nnope\nQUIT\n7*7\n";
    let mut out = Vec::new();
    run_repl(&mut Cursor::new(input), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("= 5\n"));
    assert!(out.contains("Error: Division by zero\n"));
    assert!(out.contains("Error: Invalid expression format \"nope\"\n"));
    assert!(!out.contains("= 49"));
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn repl_stops_at_end_of_input() {
    let mut out = Vec::new();
    run_repl(&mut Cursor::new("1-1\n"), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("= 0\n"));
    assert!(out.ends_with("Goodbye!\n"));
}
