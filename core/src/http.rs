//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe the fetch round-trip as plain data. The core builds
//! `HttpRequest` values and parses `HttpResponse` values without ever
//! touching the network — the caller (host) executes the actual I/O. The
//! viewer only ever issues GETs, so the request carries no method or body.
//!
//! All fields use owned types so values can move freely into the host's
//! executor task.

/// A GET request described as plain data.
///
/// Built by `TodoClient::build_fetch_todo`. The caller is responsible for
/// executing this request against the network and returning the
/// corresponding `HttpResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data, constructed by the caller
/// after executing an `HttpRequest` and then handed to
/// `TodoClient::parse_fetch_todo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
