use crate::core::LEADING_ARGS;
use crate::domain::model::Operands;
use crate::utils::error::{ArithError, Result, MULTIPLIER_NUMBER_MESSAGE};
use crate::utils::output::format_number;
use crate::utils::validation::parse_operand_with;

/// Program name plus two operands.
pub const EXPECTED_ARGS: usize = LEADING_ARGS + 2;

pub fn echo_lines(args: &[String]) -> Vec<String> {
    args.iter()
        .enumerate()
        .map(|(index, value)| format!("argv[{}]: {}", index, value))
        .collect()
}

/// Prints every raw argument with its index. Runs before any validation.
pub fn echo_args(args: &[String]) {
    for line in echo_lines(args) {
        println!("{}", line);
    }
}

pub fn parse_arguments(args: &[String]) -> Result<Operands> {
    if args.len() != EXPECTED_ARGS {
        tracing::debug!("Expected {} arguments, got {}", EXPECTED_ARGS, args.len());
        return Err(ArithError::WrongArgumentCount {
            expected: EXPECTED_ARGS,
            actual: args.len(),
        });
    }

    let a = parse_operand_with(&args[LEADING_ARGS], MULTIPLIER_NUMBER_MESSAGE)?;
    let b = parse_operand_with(&args[LEADING_ARGS + 1], MULTIPLIER_NUMBER_MESSAGE)?;
    Ok(Operands::new(a, b))
}

pub fn label_for(operands: &Operands) -> String {
    format!(
        "multiplied {} and {} and the result is: ",
        format_number(operands.a),
        format_number(operands.b)
    )
}

pub fn multiply_line(a: f64, b: f64, label: &str) -> String {
    format!("{} {}", label, format_number(a * b))
}

/// Prints `label` followed by the product.
pub fn multiply(a: f64, b: f64, label: &str) {
    println!("{}", multiply_line(a, b, label));
}

/// Validates the raw argument list and prints the product line.
pub fn run(args: &[String]) -> Result<Operands> {
    let operands = parse_arguments(args)?;
    tracing::debug!("Multiplying {} by {}", operands.a, operands.b);
    multiply(operands.a, operands.b, &label_for(&operands));
    Ok(operands)
}
