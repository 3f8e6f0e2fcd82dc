//! Terminal renderer: one styled line per outcome.

use colored::Colorize;

use crate::app::AppState;
use crate::messages::Messages;
use crate::output::OutputRenderer;

/// Terminal output renderer with colored text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, state: &AppState) -> String {
        let messages = Messages::for_locale(state.locale);
        let expression = format!(
            "{} {} {}",
            state.first.trim(),
            state.operation(),
            state.second.trim()
        );

        if state.display.has_error() {
            return format!(
                " {} {} {}\n   {} {}\n",
                "✖".red().bold(),
                expression.dimmed(),
                format!("= {}", state.display.result).red().bold(),
                format!("{}:", messages.error_label).red(),
                state.display.error,
            );
        }

        format!(
            " {} {} = {}\n",
            "✔".green().bold(),
            expression,
            state.display.result.green().bold(),
        )
    }
}
