pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CalculatorConfig;

pub use core::calculator::compute;
pub use domain::model::{Operands, Operation};
pub use utils::error::{ArithError, Result};
