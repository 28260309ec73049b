//! Explicit view state machine for the fetch-and-render lifecycle.
//!
//! # Design
//! The UI's three reactive flags (record, in-flight, error message)
//! collapse into one `ViewState` value, so exactly one of
//! {loading, error, loaded} is observable at a time by construction.
//!
//! `Viewer` owns the state and a fetch sequence counter. Hosts call
//! `begin_fetch` to obtain the request plus its sequence number, execute
//! the round-trip however they like, and feed the outcome back through
//! `complete_fetch`. A completion carrying a superseded sequence number is
//! dropped, so a stale response can never overwrite the result of a newer
//! fetch.

use crate::client::TodoClient;
use crate::error::FetchError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Todo;

/// Identifies one fetch. Returned by `begin_fetch` and required by
/// `complete_fetch`; completions with a stale sequence are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchSeq(u64);

/// The mutually exclusive render states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Before the first fetch has begun.
    Idle,
    /// A fetch is in flight; any prior record or error has been cleared.
    Loading,
    /// The last fetch settled with an error; the message is user-facing.
    Error(String),
    /// The last fetch settled with a record.
    Loaded(Todo),
}

/// Owns the view state and drives every transition.
#[derive(Debug)]
pub struct Viewer {
    client: TodoClient,
    state: ViewState,
    seq: u64,
}

impl Viewer {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            state: ViewState::Idle,
            seq: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn endpoint_url(&self) -> &str {
        self.client.endpoint_url()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    /// The refresh control is disabled while a fetch is in flight — the
    /// system's only concurrency-control rule.
    pub fn refresh_enabled(&self) -> bool {
        !self.is_loading()
    }

    /// Enter `Loading`, clearing any prior record or error, and hand the
    /// host the request to execute along with its sequence number.
    ///
    /// Used for both the initial load and refresh; the refresh pacing
    /// delay belongs to the host's effect layer, not the state machine.
    pub fn begin_fetch(&mut self) -> (FetchSeq, HttpRequest) {
        self.seq += 1;
        self.state = ViewState::Loading;
        (FetchSeq(self.seq), self.client.build_fetch_todo())
    }

    /// Settle a fetch. The transition out of `Loading` happens only once
    /// the outcome is fully interpreted, so the loading indicator covers
    /// status checking and body parsing.
    pub fn complete_fetch(&mut self, seq: FetchSeq, outcome: Result<HttpResponse, FetchError>) {
        if seq.0 != self.seq {
            // Stale response from a superseded fetch.
            return;
        }
        let settled = outcome.and_then(|response| self.client.parse_fetch_todo(response));
        self.state = match settled {
            Ok(todo) => ViewState::Loaded(todo),
            Err(err) => ViewState::Error(err.to_string()),
        };
    }
}
