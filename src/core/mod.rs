pub mod calculator;
pub mod multiplier;

pub use crate::domain::model::{Operands, Operation};
pub use crate::utils::error::Result;

/// Implicit entries at the head of the argument list (the program name).
pub const LEADING_ARGS: usize = 1;
