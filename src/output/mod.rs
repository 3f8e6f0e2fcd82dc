//! Output renderers for a finished calculation: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::app::AppState;

/// Trait for rendering the outcome of a calculation to an output format.
pub trait OutputRenderer {
    /// Render the state to a string.
    fn render(&self, state: &AppState) -> String;
}
