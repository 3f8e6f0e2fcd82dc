//! Application controller and event loop.
//!
//! The controller owns all UI state, including the active operation, and
//! hands the operation to the [`Calculator`] at trigger time. Each trigger
//! runs as its own task; starting a new one aborts the previous task, and
//! completions from superseded tasks are discarded by generation number.

pub mod state;

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::client::Calculator;
use crate::error::CalcError;
use crate::models::{Field, Locale, Operation};
use crate::validate;

pub use state::{AppState, Display, OperationSelector, Phase, format_number};

/// Input coming from the user interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// An operation control was activated.
    Select(Operation),
    /// One of the numeric fields changed.
    Input(Field, String),
    /// The calculate control (or Enter) was pressed.
    Calculate,
    /// The session is over.
    Quit,
}

/// Result of a dispatched request, tagged with the trigger that started it.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub generation: u64,
    pub outcome: Result<f64, CalcError>,
}

/// Receives the state after every change.
pub trait Presenter {
    fn present(&mut self, state: &AppState);
}

/// Owns the calculator state and the in-flight request.
pub struct Controller {
    calculator: Arc<dyn Calculator>,
    state: AppState,
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
}

impl Controller {
    pub fn new(calculator: Arc<dyn Calculator>, locale: Locale) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            calculator,
            state: AppState::new(locale),
            generation: 0,
            in_flight: None,
            completions_tx,
            completions_rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Whether a request is still awaiting its response.
    pub fn is_in_flight(&self) -> bool {
        self.state.phase == Phase::AwaitingResponse
    }

    /// Apply one UI event.
    ///
    /// A settled outcome returns to `Idle` on the next user action.
    pub fn handle(&mut self, event: UiEvent) {
        if self.state.phase.is_settled() {
            self.state.phase = Phase::Idle;
        }
        match event {
            UiEvent::Select(operation) => self.select_operation(operation),
            UiEvent::Input(field, text) => self.state.set_input(field, text),
            UiEvent::Calculate => {
                self.trigger();
            }
            UiEvent::Quit => {}
        }
    }

    /// Make `operation` the sole active operation.
    pub fn select_operation(&mut self, operation: Operation) {
        self.state.selector.select(operation);
    }

    /// Start a calculation from the current inputs.
    ///
    /// Clears the error area, validates, and either shows the validation
    /// error or dispatches a request. Any earlier in-flight request is
    /// cancelled in both cases. Returns `true` if a request was dispatched.
    pub fn trigger(&mut self) -> bool {
        self.cancel_in_flight();
        self.generation += 1;

        self.state.display.error.clear();
        self.state.phase = Phase::Validating;

        let request = match validate::validate(
            &self.state.first,
            &self.state.second,
            self.state.operation(),
        ) {
            Ok(request) => request,
            Err(err) => {
                self.fail(&err);
                return false;
            }
        };

        let calculator = Arc::clone(&self.calculator);
        let tx = self.completions_tx.clone();
        let generation = self.generation;
        self.in_flight = Some(tokio::spawn(async move {
            let outcome = calculator.calculate(&request).await;
            // The controller may already be gone; nothing to report to.
            let _ = tx.send(Completion { generation, outcome });
        }));
        self.state.phase = Phase::AwaitingResponse;
        tracing::debug!(generation, "calculation dispatched");
        true
    }

    /// Apply a completion to the display.
    ///
    /// Returns `false` for completions from superseded triggers, which are
    /// dropped without touching the state.
    pub fn complete(&mut self, completion: Completion) -> bool {
        if completion.generation != self.generation || !self.is_in_flight() {
            tracing::debug!(
                stale = completion.generation,
                current = self.generation,
                "discarding stale completion"
            );
            return false;
        }
        self.in_flight = None;

        match completion.outcome {
            Ok(value) => {
                self.state.display = Display::success(value);
                self.state.phase = Phase::Success;
            }
            Err(err) => self.fail(&err),
        }
        true
    }

    /// Wait for the next completion from a dispatched task.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.completions_rx.recv().await
    }

    /// Trigger a calculation and wait until its outcome is on display.
    pub async fn calculate(&mut self) -> &Display {
        if self.trigger() {
            while let Some(completion) = self.next_completion().await {
                if self.complete(completion) {
                    break;
                }
            }
        }
        &self.state.display
    }

    /// Drive the controller from `events` until the UI quits or closes.
    ///
    /// The presenter sees the initial state and every state change.
    pub async fn run<P>(&mut self, mut events: mpsc::Receiver<UiEvent>, presenter: &mut P)
    where
        P: Presenter + ?Sized,
    {
        presenter.present(&self.state);

        loop {
            tokio::select! {
                event = events.recv() => match event {
                    None | Some(UiEvent::Quit) => break,
                    Some(event) => self.handle(event),
                },
                Some(completion) = self.completions_rx.recv() => {
                    if !self.complete(completion) {
                        continue;
                    }
                }
            }
            presenter.present(&self.state);
        }

        self.cancel_in_flight();
    }

    fn fail(&mut self, err: &CalcError) {
        if err.is_preflight() {
            tracing::debug!(error = %err, "calculation rejected before dispatch");
        } else {
            tracing::info!(generation = self.generation, error = %err, "calculation failed");
        }
        self.state.display = Display::failure(err, self.state.locale);
        self.state.phase = Phase::Error;
    }

    fn cancel_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                tracing::info!(generation = self.generation, "cancelling in-flight calculation");
            }
            handle.abort();
        }
        if self.state.phase == Phase::AwaitingResponse {
            self.state.phase = Phase::Idle;
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
