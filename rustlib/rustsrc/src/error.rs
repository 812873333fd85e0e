use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid operator {0:?}, expected one of +, -, *, /")]
    InvalidOperator(String),

    #[error("Invalid number {0:?}")]
    InvalidNumber(String),

    #[error("Invalid expression format {0:?}")]
    InvalidExpression(String),
}
