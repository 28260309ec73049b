//! Stateless request builder and response parser for the todo endpoint.
//!
//! # Design
//! `TodoClient` holds only the configured endpoint URL and carries no
//! mutable state between calls. The fetch operation is split into
//! `build_fetch_todo`, which produces an `HttpRequest`, and
//! `parse_fetch_todo`, which consumes an `HttpResponse`. The caller
//! executes the actual HTTP round-trip in between, keeping the core
//! deterministic and free of I/O dependencies.

use crate::error::FetchError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Todo;

/// Stateless client bound to the externally configured endpoint URL.
///
/// The URL addresses the todo resource directly; no path joining is
/// performed and the URL is stored exactly as configured so the UI can
/// display it verbatim.
#[derive(Debug, Clone)]
pub struct TodoClient {
    endpoint_url: String,
}

impl TodoClient {
    pub fn new(endpoint_url: &str) -> Self {
        Self {
            endpoint_url: endpoint_url.to_string(),
        }
    }

    /// The configured endpoint URL, shown as static text by the UI.
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn build_fetch_todo(&self) -> HttpRequest {
        HttpRequest {
            url: self.endpoint_url.clone(),
            headers: Vec::new(),
        }
    }

    /// Interpret the response: non-2xx statuses become `HttpStatus`
    /// errors, undecodable bodies become `Transport` errors with the serde
    /// description, and everything else deserializes into a `Todo`.
    pub fn parse_fetch_todo(&self, response: HttpResponse) -> Result<Todo, FetchError> {
        if !response.is_success() {
            return Err(FetchError::HttpStatus(response.status));
        }
        serde_json::from_str(&response.body).map_err(|e| FetchError::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "http://localhost:3000/todos/1";

    fn client() -> TodoClient {
        TodoClient::new(ENDPOINT)
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_fetch_todo_targets_the_configured_url() {
        let req = client().build_fetch_todo();
        assert_eq!(req.url, ENDPOINT);
        assert!(req.headers.is_empty());
    }

    #[test]
    fn endpoint_url_is_stored_verbatim() {
        let client = TodoClient::new("http://localhost:3000/todos/1/");
        assert_eq!(client.endpoint_url(), "http://localhost:3000/todos/1/");
    }

    #[test]
    fn parse_fetch_todo_success() {
        let body = r#"{"id":1,"userId":1,"title":"delectus aut autem","completed":false}"#;
        let todo = client().parse_fetch_todo(response(200, body)).unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.user_id, 1);
        assert_eq!(todo.title, "delectus aut autem");
        assert!(!todo.completed);
    }

    #[test]
    fn parse_fetch_todo_not_found() {
        let err = client().parse_fetch_todo(response(404, "")).unwrap_err();
        assert_eq!(err, FetchError::HttpStatus(404));
    }

    #[test]
    fn parse_fetch_todo_server_error_keeps_status() {
        let err = client()
            .parse_fetch_todo(response(500, "internal error"))
            .unwrap_err();
        assert_eq!(err, FetchError::HttpStatus(500));
    }

    #[test]
    fn parse_fetch_todo_bad_json() {
        let err = client().parse_fetch_todo(response(200, "not json")).unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn parse_fetch_todo_missing_field_is_a_parse_error() {
        let body = r#"{"id":1,"title":"no userId","completed":false}"#;
        let err = client().parse_fetch_todo(response(200, body)).unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
