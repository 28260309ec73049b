//! Domain DTO for the todo endpoint.
//!
//! # Design
//! `Todo` mirrors the endpoint's JSON shape but is defined independently of
//! the mock-server crate; integration tests catch schema drift. The record
//! is write-once per fetch — the viewer replaces it wholesale on the next
//! fetch and never mutates individual fields.

use serde::{Deserialize, Serialize};

/// The single todo record fetched and displayed.
///
/// Both identifiers are opaque to this system; no cross-referencing is
/// performed. The wire shape is `{ id, userId, title, completed }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}
