//! The closed set of arithmetic operation tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

/// An arithmetic operation, serialized as its wire symbol.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum Operation {
    #[default]
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operation {
    /// Every selectable operation, in display order.
    pub fn all() -> impl Iterator<Item = Operation> {
        Operation::iter()
    }

    /// The wire symbol sent in the `operation` field.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "+" | "add" | "plus" => Ok(Operation::Add),
            "-" | "sub" | "subtract" | "minus" => Ok(Operation::Subtract),
            "*" | "x" | "×" | "mul" | "multiply" | "times" => Ok(Operation::Multiply),
            "/" | "÷" | "div" | "divide" => Ok(Operation::Divide),
            _ => Err(format!("unknown operation: {s}")),
        }
    }
}
