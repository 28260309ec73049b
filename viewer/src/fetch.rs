//! Executes the core's plain-data requests over real HTTP.

use std::time::Duration;

use viewer_core::{FetchError, HttpRequest, HttpResponse};

/// Pacing delay applied before a user-initiated refresh issues its request.
/// A single deferred execution, not a retry loop.
pub const REFRESH_DELAY: Duration = Duration::from_millis(500);

/// Execute the GET described by `request`, mapping transport failures into
/// `FetchError::Transport`. Status interpretation stays in the core.
pub async fn execute(request: &HttpRequest) -> Result<HttpResponse, FetchError> {
    let client = reqwest::Client::new();
    let mut builder = client.get(&request.url);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }

    let response = builder
        .send()
        .await
        .map_err(|err| FetchError::Transport(err.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|err| FetchError::Transport(err.to_string()))?;

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn transport_failure_maps_to_transport_error() {
        // Bind and immediately drop a listener so the port has no server.
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let request = HttpRequest {
            url: format!("http://{addr}/todos/1"),
            headers: Vec::new(),
        };
        let err = execute(&request).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }
}
