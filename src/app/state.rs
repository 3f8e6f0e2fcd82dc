//! UI-visible state: the operation selector, the two input fields, and
//! the result/error display.

use crate::constants::INITIAL_RESULT;
use crate::error::CalcError;
use crate::messages::Messages;
use crate::models::{Field, Locale, Operation};

/// Where the calculation flow currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    AwaitingResponse,
    Success,
    Error,
}

impl Phase {
    /// An attempt has finished and its outcome is on display.
    pub fn is_settled(&self) -> bool {
        matches!(self, Phase::Success | Phase::Error)
    }
}

/// Tracks the single active operation among the fixed set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationSelector {
    active: Operation,
}

impl OperationSelector {
    /// Make `operation` the sole active control.
    pub fn select(&mut self, operation: Operation) {
        self.active = operation;
    }

    pub fn active(&self) -> Operation {
        self.active
    }

    /// Every control paired with its active marker. Exactly one is `true`.
    pub fn controls(&self) -> impl Iterator<Item = (Operation, bool)> + '_ {
        Operation::all().map(move |op| (op, op == self.active))
    }
}

/// Contents of the result and error areas.
#[derive(Debug, Clone, PartialEq)]
pub struct Display {
    pub result: String,
    pub error: String,
    /// The numeric value behind `result`, when the last attempt succeeded.
    pub value: Option<f64>,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            result: INITIAL_RESULT.to_string(),
            error: String::new(),
            value: None,
        }
    }
}

impl Display {
    /// Show a value and clear any prior error.
    pub fn success(value: f64) -> Self {
        Self {
            result: format_number(value),
            error: String::new(),
            value: Some(value),
        }
    }

    /// Show `err` in the error area and the placeholder in the result area.
    pub fn failure(err: &CalcError, locale: Locale) -> Self {
        Self {
            result: Messages::for_locale(locale).result_placeholder.to_string(),
            error: err.user_message(locale),
            value: None,
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}

/// Shortest round-trip form of `value`, without a trailing `.0` and
/// without a sign on zero.
///
/// Magnitudes from `1e21` up and below `1e-6` switch to exponent form
/// (`1e+21`, `1.5e-7`), the same cut-offs a browser uses when printing a
/// number.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude.is_finite() && !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{value:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{mantissa}e+{power}")
            }
            _ => exp,
        };
    }
    format!("{value}")
}

/// Everything a presenter needs to draw the calculator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub selector: OperationSelector,
    pub first: String,
    pub second: String,
    pub display: Display,
    pub phase: Phase,
    pub locale: Locale,
}

impl AppState {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    pub fn operation(&self) -> Operation {
        self.selector.active()
    }

    pub fn input(&self, field: Field) -> &str {
        match field {
            Field::First => &self.first,
            Field::Second => &self.second,
        }
    }

    pub(crate) fn set_input(&mut self, field: Field, text: String) {
        match field {
            Field::First => self.first = text,
            Field::Second => self.second = text,
        }
    }
}
