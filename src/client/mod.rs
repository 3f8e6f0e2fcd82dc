//! Calculator trait and the HTTP dispatcher behind it.
//!
//! The controller only sees [`Calculator`], so tests can swap in a mock
//! that records requests without opening a socket.

pub mod http;

use async_trait::async_trait;

use crate::error::CalcError;
use crate::models::CalculationRequest;

pub use http::HttpCalculator;

/// Performs one remote evaluation.
#[async_trait]
pub trait Calculator: Send + Sync {
    /// Send `request` and wait for the numeric result.
    ///
    /// Fails with [`CalcError::ServerCalculation`] when the server reports
    /// an error, or [`CalcError::Transport`] for anything that prevented a
    /// well-formed answer.
    async fn calculate(&self, request: &CalculationRequest) -> Result<f64, CalcError>;
}
