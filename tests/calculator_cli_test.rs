use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;

fn calculator() -> Result<Command> {
    Ok(Command::cargo_bin("calculator")?)
}

#[test]
fn test_add_prints_green_result() -> Result<()> {
    calculator()?
        .args(["3", "4", "add"])
        .assert()
        .success()
        .stdout("\x1b[32mResult: 7\x1b[0m\n")
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_multiply_and_divide() -> Result<()> {
    calculator()?
        .args(["6", "7", "multiply"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 42"));

    calculator()?
        .args(["10", "4", "divide"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 2.5"));
    Ok(())
}

#[test]
fn test_negative_operands() -> Result<()> {
    calculator()?
        .args(["-3", "-4", "multiply"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 12"));
    Ok(())
}

#[test]
fn test_divide_by_zero_fails() -> Result<()> {
    calculator()?
        .args(["10", "0", "divide"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("\x1b[31mError: Cannot divide by zero\x1b[0m\n");
    Ok(())
}

#[test]
fn test_invalid_number_fails() -> Result<()> {
    calculator()?
        .args(["5", "x", "multiply"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Both num1 and num2 must be valid numbers",
        ));
    Ok(())
}

#[test]
fn test_invalid_operation_is_case_sensitive() -> Result<()> {
    calculator()?
        .args(["1", "2", "Add"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid operation: \"Add\""));
    Ok(())
}

#[test]
fn test_missing_arguments_prints_usage() -> Result<()> {
    calculator()?
        .args(["1", "2"])
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("Error: Missing arguments.")
                .and(predicate::str::contains(
                    "Usage: calculator <num1> <num2> <operation>",
                ))
                .and(predicate::str::contains("Allowed ops: add | multiply | divide")),
        );

    calculator()?
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing arguments."));
    Ok(())
}

#[test]
fn test_empty_argument_counts_as_missing() -> Result<()> {
    calculator()?
        .args(["", "2", "add"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing arguments."));
    Ok(())
}

#[test]
fn test_extra_arguments_are_ignored() -> Result<()> {
    calculator()?
        .args(["1", "2", "add", "ignored"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 3"));
    Ok(())
}

#[test]
fn test_leading_dash_operands_reach_validation() -> Result<()> {
    calculator()?
        .args(["-.5", "2", "add"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 1.5"));

    calculator()?
        .args(["5", "-x", "multiply"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Both num1 and num2 must be valid numbers",
        ));

    calculator()?
        .args(["-V", "2", "add"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Both num1 and num2 must be valid numbers",
        ));
    Ok(())
}

#[test]
fn test_dash_operation_is_invalid_operation() -> Result<()> {
    calculator()?
        .args(["1", "2", "-v"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid operation: \"-v\""));
    Ok(())
}

#[test]
fn test_negative_zero_and_overflow_formatting() -> Result<()> {
    calculator()?
        .args(["0", "-5", "multiply"])
        .assert()
        .success()
        .stdout("\x1b[32mResult: 0\x1b[0m\n");

    calculator()?
        .args(["1e308", "10", "multiply"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: Infinity"));
    Ok(())
}

#[test]
fn test_flag_misuse_uses_error_contract() -> Result<()> {
    calculator()?
        .args(["--verbose=yes", "1", "2", "add"])
        .assert()
        .code(1)
        .stderr(
            predicate::str::starts_with("\x1b[31mError: ")
                .and(predicate::str::contains("--verbose")),
        );
    Ok(())
}

#[test]
fn test_help_is_plain_text() -> Result<()> {
    calculator()?
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Evaluate one binary arithmetic operation")
                .and(predicate::str::contains("ArithError").not()),
        );
    Ok(())
}
