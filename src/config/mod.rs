use crate::utils::error::ArithError;
use clap::{ArgAction, Parser};

// Positionals are optional so absence surfaces as ArithError::MissingArguments
// with the calculator's usage text. There are no short flags and positionals
// take hyphen values, so operands like `-.5` or `-x` always reach validation.
/// Command line of the `calculator` binary.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "calculator")]
#[command(about = "Evaluate one binary arithmetic operation", long_about = None)]
#[command(disable_help_flag = true)]
pub struct CalculatorConfig {
    /// First operand
    #[arg(allow_hyphen_values = true)]
    pub num1: Option<String>,

    /// Second operand
    #[arg(allow_hyphen_values = true)]
    pub num2: Option<String>,

    /// One of: add, multiply, divide
    #[arg(allow_hyphen_values = true)]
    pub operation: Option<String>,

    /// Ignored trailing arguments
    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, action = ArgAction::Help, help = "Print help")]
    pub help: Option<bool>,
}

impl CalculatorConfig {
    /// The three positional arguments, after the program name.
    pub fn positionals(&self) -> (Option<&str>, Option<&str>, Option<&str>) {
        (
            self.num1.as_deref(),
            self.num2.as_deref(),
            self.operation.as_deref(),
        )
    }
}

/// Converts a clap failure into the crate's error, keeping clap's first line
/// (which names the offending token) without its `error: ` prefix.
pub fn usage_error(e: &clap::Error) -> ArithError {
    let rendered = e.render().to_string();
    let first_line = rendered.lines().next().unwrap_or_default().trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    ArithError::Usage { message }
}
