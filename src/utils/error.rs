use thiserror::Error;

pub const CALCULATOR_NUMBER_MESSAGE: &str = "Both num1 and num2 must be valid numbers";
pub const MULTIPLIER_NUMBER_MESSAGE: &str = "Provided arguments were not numbers";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithError {
    #[error(
        "Missing arguments.\nUsage: calculator <num1> <num2> <operation>\nAllowed ops: add | multiply | divide"
    )]
    MissingArguments,

    #[error("{message}")]
    InvalidNumber {
        value: String,
        message: &'static str,
    },

    #[error("Invalid operation: \"{op}\"")]
    InvalidOperation { op: String },

    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Wrong number of arguments (expected {expected}, got {actual})")]
    WrongArgumentCount { expected: usize, actual: usize },

    #[error("{message}")]
    Usage { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
}

impl ArithError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ArithError::DivisionByZero => ErrorCategory::Arithmetic,
            _ => ErrorCategory::Input,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ArithError::MissingArguments => "Pass two numbers followed by an operation name",
            ArithError::InvalidNumber { .. } => "Use decimal notation such as 3, -2.5 or 1e3",
            ArithError::InvalidOperation { .. } => {
                "Use one of add, multiply or divide (lowercase)"
            }
            ArithError::DivisionByZero => "Use a non-zero divisor",
            ArithError::WrongArgumentCount { .. } => "Pass exactly two numbers",
            ArithError::Usage { .. } => "Run with --help to see accepted arguments",
        }
    }

    /// Process exit status for this error. Every failure maps to 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, ArithError>;
