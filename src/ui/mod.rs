//! Interactive terminal front-end.
//!
//! Reads commands line by line, turns them into [`UiEvent`]s for the
//! controller, and shows a status line after every change. Pressing Enter
//! on an empty line is the calculate trigger.

pub mod input;
pub mod view;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::app::{Controller, UiEvent};
use crate::messages::Messages;
use crate::models::Locale;

pub use input::{Command, parse_line};
pub use view::{TerminalPresenter, render_status};

/// Forward parsed lines from `reader` to `events`.
///
/// Help and "unknown command" hints go to `hints` and never reach the
/// controller. The task ends at end of input or once the receiver is gone.
pub fn spawn_reader<R, H>(
    reader: R,
    events: mpsc::Sender<UiEvent>,
    mut hints: H,
    locale: Locale,
) -> JoinHandle<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    H: Write + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = reader.lines();
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read input");
                    break;
                }
            };

            match parse_line(&line) {
                Command::Events(batch) => {
                    for event in batch {
                        if events.send(event).await.is_err() {
                            return;
                        }
                    }
                }
                Command::Help => {
                    let _ = writeln!(hints, "{}", input::HELP);
                }
                Command::Unknown(text) => {
                    tracing::debug!(input = %text, "unrecognised command");
                    let _ = writeln!(hints, "  {}", Messages::for_locale(locale).unknown_command);
                }
            }
        }
    })
}

/// Run an interactive session until the user quits or input ends.
pub async fn run_session<R, W, H>(controller: &mut Controller, reader: R, out: W, hints: H)
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: Write,
    H: Write + Send + 'static,
{
    let (tx, rx) = mpsc::channel(32);
    let reader_task = spawn_reader(reader, tx, hints, controller.state().locale);
    let mut presenter = TerminalPresenter::new(out);

    controller.run(rx, &mut presenter).await;
    reader_task.abort();
}
