//! Shared types used across all modules.
//!
//! Defines the operation token, the request/response pair exchanged with
//! the `/calculate` endpoint, and the display locale. Other modules import
//! from here rather than reaching into each other's internals.

pub mod calculation;
pub mod locale;
pub mod operation;

pub use calculation::{CalculationRequest, CalculationResponse};
pub use locale::Locale;
pub use operation::Operation;

use std::fmt;

/// One of the two numeric input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    First,
    Second,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::First => write!(f, "a"),
            Field::Second => write!(f, "b"),
        }
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a" | "1" | "first" | "num1" => Ok(Field::First),
            "b" | "2" | "second" | "num2" => Ok(Field::Second),
            _ => Err(format!("unknown field: {s}")),
        }
    }
}
