//! Fetch-and-render core for the todo viewer.
//!
//! # Overview
//! Builds `HttpRequest` values, parses `HttpResponse` values, and drives an
//! explicit view state machine without touching the network (host-does-IO
//! pattern). The host executes the actual HTTP round-trip and feeds the
//! outcome back in, which keeps the core fully deterministic and testable.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only the configured endpoint URL.
//! - The fetch operation is split into `build_fetch_todo` (produces the
//!   request) and `parse_fetch_todo` (consumes the response), so the I/O
//!   boundary is explicit.
//! - `Viewer` collapses the UI's loading/error/record flags into a single
//!   `ViewState` value; rendering is a pure function of that state.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod state;
pub mod types;

pub use client::TodoClient;
pub use error::FetchError;
pub use http::{HttpRequest, HttpResponse};
pub use state::{FetchSeq, ViewState, Viewer};
pub use types::Todo;
