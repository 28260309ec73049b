//! Error types for the todo fetch operation.
//!
//! # Design
//! Exactly two kinds exist. A response that arrived with a status outside
//! the 2xx range keeps its numeric code; everything else — transport
//! failures and bodies that could not be interpreted — carries the
//! underlying failure's description. Both are converted into the `Error`
//! view state at the fetch boundary, so the `Display` output here is
//! exactly what the user sees in the error panel.

use std::fmt;

/// Errors produced while fetching the todo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// A response arrived but its status was outside the 2xx range.
    HttpStatus(u16),

    /// The request could not complete, or the body could not be parsed.
    /// Carries the underlying failure's description, which may be empty
    /// when the transport provides none.
    Transport(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::HttpStatus(status) => write!(f, "HTTP error! status: {status}"),
            FetchError::Transport(msg) if msg.is_empty() => write!(f, "An error occurred"),
            FetchError::Transport(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for FetchError {}
