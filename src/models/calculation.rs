//! Request and response bodies exchanged with the `/calculate` endpoint.

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::models::Operation;

/// Body of a `POST /calculate` request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub num1: f64,
    pub num2: f64,
    pub operation: Operation,
}

impl CalculationRequest {
    pub fn new(num1: f64, num2: f64, operation: Operation) -> Self {
        Self { num1, num2, operation }
    }
}

/// Body returned by the endpoint.
///
/// Exactly one of the two fields is expected, but both are optional so a
/// malformed body can be reported instead of failing to decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CalculationResponse {
    /// Resolve the body into a value or an error.
    ///
    /// A non-empty `error` field is authoritative even when a `result` is
    /// also present.
    pub fn into_result(self) -> Result<f64, CalcError> {
        if let Some(message) = self.error.filter(|m| !m.is_empty()) {
            return Err(CalcError::ServerCalculation(message));
        }
        self.result.ok_or_else(|| {
            CalcError::Transport("response carried neither a result nor an error".to_string())
        })
    }
}
