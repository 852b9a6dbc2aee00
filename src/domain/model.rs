use crate::utils::error::ArithError;
use std::fmt;
use std::str::FromStr;

/// The arithmetic actions the calculator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Multiply, Operation::Divide];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ArithError;

    /// Case-sensitive: `"Add"` is not an operation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ArithError::InvalidOperation { op: s.to_string() })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub a: f64,
    pub b: f64,
}

impl Operands {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}
