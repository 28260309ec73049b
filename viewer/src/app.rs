//! Application state: the core `Viewer` plus the effect plumbing that
//! drives it from I/O events.

use std::time::Duration;

use tokio::sync::mpsc;
use viewer_core::{FetchError, FetchSeq, HttpResponse, TodoClient, ViewState, Viewer};

use crate::fetch;

/// Outcome of one executed fetch, tagged with its sequence number so the
/// state machine can drop stale completions.
#[derive(Debug)]
struct FetchOutcome {
    seq: FetchSeq,
    result: Result<HttpResponse, FetchError>,
}

pub struct App {
    viewer: Viewer,
    spinner_tick: usize,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl App {
    /// Create the app and start the initial load immediately.
    pub fn new(endpoint_url: String) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            viewer: Viewer::new(TodoClient::new(&endpoint_url)),
            spinner_tick: 0,
            outcome_tx,
            outcome_rx,
        };
        app.spawn_fetch(None);
        app
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn spinner_tick(&self) -> usize {
        self.spinner_tick
    }

    /// Advance the spinner animation.
    pub fn tick(&mut self) {
        self.spinner_tick = self.spinner_tick.wrapping_add(1);
    }

    /// User-initiated refresh. Ignored while a fetch is in flight; the
    /// network call itself is deferred by the pacing delay.
    pub fn refresh(&mut self) {
        if !self.viewer.refresh_enabled() {
            return;
        }
        self.spawn_fetch(Some(fetch::REFRESH_DELAY));
    }

    /// Drain settled fetches into the state machine.
    pub fn process_fetch_events(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            match &outcome.result {
                Ok(response) => tracing::debug!(status = response.status, "fetch completed"),
                Err(err) => tracing::error!("fetch transport failure: {err}"),
            }
            self.viewer.complete_fetch(outcome.seq, outcome.result);
            if let ViewState::Error(message) = self.viewer.state() {
                tracing::error!("todo fetch settled with error: {message}");
            }
        }
    }

    fn spawn_fetch(&mut self, delay: Option<Duration>) {
        let (seq, request) = self.viewer.begin_fetch();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            let result = fetch::execute(&request).await;
            let _ = tx.send(FetchOutcome { seq, result });
        });
    }
}
