//! Status line for the interactive session.

use std::io::Write;

use colored::Colorize;

use crate::app::{AppState, Phase, Presenter};
use crate::messages::Messages;
use crate::models::Field;

/// Render the calculator as a single line.
///
/// Shows both fields, the four operation controls with the active one
/// highlighted, and the result or error area.
pub fn render_status(state: &AppState) -> String {
    let messages = Messages::for_locale(state.locale);

    let controls: Vec<String> = state
        .selector
        .controls()
        .map(|(op, active)| {
            if active {
                format!("[{op}]").bold().reversed().to_string()
            } else {
                format!(" {op} ").dimmed().to_string()
            }
        })
        .collect();

    let field = |f: Field| {
        let text = state.input(f);
        if text.is_empty() {
            format!("{f}: {}", "_".dimmed())
        } else {
            format!("{f}: {}", text.bold())
        }
    };

    let tail = match state.phase {
        Phase::AwaitingResponse => messages.waiting.dimmed().to_string(),
        _ if state.display.has_error() => format!(
            "{} {}  {} {}",
            format!("{}:", messages.result_label).dimmed(),
            state.display.result.red().bold(),
            format!("{}:", messages.error_label).red(),
            state.display.error.red(),
        ),
        _ => format!(
            "{} {}",
            format!("{}:", messages.result_label).dimmed(),
            state.display.result.green().bold(),
        ),
    };

    format!(
        " {}  {}  {}  │ {}",
        field(Field::First),
        controls.join(""),
        field(Field::Second),
        tail
    )
}

/// Writes a status line whenever the visible state changes.
pub struct TerminalPresenter<W: Write> {
    out: W,
    last: Option<AppState>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn present(&mut self, state: &AppState) {
        if self.last.as_ref() == Some(state) {
            return;
        }
        // A closed stdout is not worth failing the session over.
        let _ = writeln!(self.out, "{}", render_status(state));
        let _ = self.out.flush();
        self.last = Some(state.clone());
    }
}
