//! Verify build/parse methods against JSON test vectors in `test-vectors/`.
//!
//! Each vector describes the configured endpoint, the expected request, a
//! simulated response, and the expected parse result. Parsed JSON is
//! compared (not raw strings) to avoid false negatives from field-ordering
//! differences.

use viewer_core::{FetchError, HttpResponse, Todo, TodoClient};

#[test]
fn fetch_test_vectors() {
    let raw = include_str!("../../test-vectors/fetch.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let client = TodoClient::new(case["endpoint"].as_str().unwrap());

        // Verify build
        let req = client.build_fetch_todo();
        let expected_req = &case["expected_request"];
        assert_eq!(req.url, expected_req["url"].as_str().unwrap(), "{name}: url");
        assert!(req.headers.is_empty(), "{name}: headers");

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        };

        match client.parse_fetch_todo(response) {
            Ok(todo) => {
                let expected: Todo = serde_json::from_value(
                    case.get("expected_todo")
                        .unwrap_or_else(|| panic!("{name}: unexpected success"))
                        .clone(),
                )
                .unwrap();
                assert_eq!(todo, expected, "{name}: parsed record");
            }
            Err(err) => {
                if let Some(expected_msg) = case["expected_error_message"].as_str() {
                    assert_eq!(err.to_string(), expected_msg, "{name}: error message");
                } else {
                    let kind = case["expected_error_kind"]
                        .as_str()
                        .unwrap_or_else(|| panic!("{name}: unexpected error {err}"));
                    assert_eq!(kind, "transport_or_parse", "{name}: vector kind");
                    assert!(matches!(err, FetchError::Transport(_)), "{name}: error kind");
                }
            }
        }
    }
}
