//! Line commands typed into the interactive session.

use crate::app::UiEvent;
use crate::models::{Field, Operation};

/// What a single input line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Events to forward to the controller, in order.
    Events(Vec<UiEvent>),
    /// Print usage.
    Help,
    /// Not understood; nothing changes.
    Unknown(String),
}

/// Usage text for `help`.
pub const HELP: &str = "\
  a <number>      set the first number   (also `1 <number>`)
  b <number>      set the second number  (also `2 <number>`)
  + - * /         select the operation
  <a> <op> <b>    set everything and calculate
  <Enter> or =    calculate
  help            show this text
  q               quit";

/// Parse one line of user input.
pub fn parse_line(line: &str) -> Command {
    let trimmed = line.trim();

    match trimmed.to_lowercase().as_str() {
        "" | "=" => return Command::Events(vec![UiEvent::Calculate]),
        "q" | "quit" | "exit" => return Command::Events(vec![UiEvent::Quit]),
        "help" | "?" => return Command::Help,
        _ => {}
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    if let [token] = tokens.as_slice() {
        if let Ok(operation) = token.parse::<Operation>() {
            return Command::Events(vec![UiEvent::Select(operation)]);
        }
    }

    // Checked before field assignment: `1` and `2` are also field names.
    if let [first, op, second] = tokens.as_slice() {
        if let Ok(operation) = op.parse::<Operation>() {
            return Command::Events(vec![
                UiEvent::Input(Field::First, first.to_string()),
                UiEvent::Select(operation),
                UiEvent::Input(Field::Second, second.to_string()),
                UiEvent::Calculate,
            ]);
        }
    }

    if let Some((head, rest)) = split_head(trimmed) {
        if let Ok(field) = head.parse::<Field>() {
            return Command::Events(vec![UiEvent::Input(field, rest.to_string())]);
        }
    }

    Command::Unknown(trimmed.to_string())
}

/// Split off the first whitespace-delimited word.
fn split_head(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.splitn(2, char::is_whitespace);
    let head = parts.next()?;
    let rest = parts.next().unwrap_or("").trim();
    Some((head, rest))
}
