//! Error taxonomy for a calculation attempt.
//!
//! Every variant is recoverable: the controller maps it to a message in the
//! error area and the session keeps going.

use thiserror::Error;

use crate::messages::Messages;
use crate::models::Locale;

/// Why a calculation attempt failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// One of the operands is not a finite number.
    #[error("both operands must be numbers")]
    InvalidInput,

    /// Division with a zero divisor, caught before any request.
    #[error("division by zero")]
    DivisionByZero,

    /// The server answered with an `error` field.
    #[error("server error: {0}")]
    ServerCalculation(String),

    /// The request could not be sent or the body could not be decoded.
    #[error("transport error: {0}")]
    Transport(String),
}

impl CalcError {
    /// Text shown in the error area.
    ///
    /// Server messages are shown verbatim; the rest are localized.
    pub fn user_message(&self, locale: Locale) -> String {
        let messages = Messages::for_locale(locale);
        match self {
            CalcError::InvalidInput => messages.invalid_input.to_string(),
            CalcError::DivisionByZero => messages.division_by_zero.to_string(),
            CalcError::ServerCalculation(message) => message.clone(),
            CalcError::Transport(message) => {
                format!("{}: {message}", messages.transport_failure)
            }
        }
    }

    /// Whether the failure happened before any network call.
    pub fn is_preflight(&self) -> bool {
        matches!(self, CalcError::InvalidInput | CalcError::DivisionByZero)
    }
}

impl From<reqwest::Error> for CalcError {
    fn from(err: reqwest::Error) -> Self {
        CalcError::Transport(err.to_string())
    }
}
