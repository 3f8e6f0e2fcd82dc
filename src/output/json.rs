//! JSON output renderer.
//!
//! Mirrors the endpoint's response shape with the raw inputs echoed:
//! `{"first": .., "second": .., "operation": .., "result": ..}` on success,
//! `{"first": .., "second": .., "operation": .., "error": ..}` on failure.

use crate::app::AppState;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, state: &AppState) -> String {
        let mut output = serde_json::json!({
            "first": state.first,
            "second": state.second,
            "operation": state.operation(),
        });

        if state.display.has_error() {
            output["error"] = state.display.error.clone().into();
        } else if let Some(value) = state.display.value {
            output["result"] = value.into();
        }

        let mut rendered = serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string());
        rendered.push('\n');
        rendered
    }
}
