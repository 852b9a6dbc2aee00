use crate::domain::model::{Operands, Operation};
use crate::utils::error::{ArithError, Result};
use crate::utils::validation::{parse_operand, require_arg};

pub fn compute(a: f64, b: f64, op: Operation) -> Result<f64> {
    match op {
        Operation::Add => Ok(a + b),
        Operation::Multiply => Ok(a * b),
        Operation::Divide => {
            if b == 0.0 {
                return Err(ArithError::DivisionByZero);
            }
            Ok(a / b)
        }
    }
}

/// Like [`compute`], for an operation name that has not been checked yet.
pub fn compute_str(a: f64, b: f64, op: &str) -> Result<f64> {
    compute(a, b, op.parse()?)
}

/// Checks the three positional arguments and converts them.
///
/// Absence is reported before anything else, so `("x", "1", None)` is a
/// missing-argument error rather than an invalid number.
pub fn validate_args(
    num1: Option<&str>,
    num2: Option<&str>,
    op: Option<&str>,
) -> Result<(Operands, Operation)> {
    let (num1, num2, op) = (require_arg(num1)?, require_arg(num2)?, require_arg(op)?);

    let operands = Operands::new(parse_operand(num1)?, parse_operand(num2)?);
    let op: Operation = op.parse()?;

    tracing::debug!("Validated input: a={}, b={}, op={}", operands.a, operands.b, op);
    Ok((operands, op))
}

/// Validates the raw arguments and computes the result.
pub fn run(num1: Option<&str>, num2: Option<&str>, op: Option<&str>) -> Result<f64> {
    let (operands, op) = validate_args(num1, num2, op)?;
    let result = compute(operands.a, operands.b, op)?;
    tracing::debug!("{} {} {} = {}", operands.a, op, operands.b, result);
    Ok(result)
}
