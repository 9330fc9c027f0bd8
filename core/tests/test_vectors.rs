//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results or error kinds. Comparing parsed JSON (not raw
//! strings) avoids false negatives from field-ordering differences.

use serde_json::Value;
use todolist_core::{ApiClient, ApiError, HttpMethod, HttpRequest, HttpResponse, List, NewList, NewTodo, TodoUpdate};

const BASE_URL: &str = "http://localhost:8081";

fn client() -> ApiClient {
    ApiClient::new(BASE_URL)
}

fn load(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

/// Compare method, URL and (when present) headers and JSON body.
fn assert_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.url, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: url");

    match expected.get("headers") {
        Some(headers) => {
            let expected_headers: Vec<(String, String)> = headers
                .as_array()
                .unwrap()
                .iter()
                .map(|h| {
                    let arr = h.as_array().unwrap();
                    (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
                })
                .collect();
            assert_eq!(req.headers, expected_headers, "{name}: headers");
        }
        None => assert!(req.headers.is_empty(), "{name}: headers should be empty"),
    }

    match expected.get("body") {
        Some(body) => {
            let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    )
}

/// Check the outcome against `expected_error`, or hand the success value to
/// `on_ok` when the case expects success.
fn assert_outcome<T: std::fmt::Debug>(name: &str, case: &Value, result: Result<T, ApiError>, on_ok: impl FnOnce(T)) {
    match case.get("expected_error") {
        Some(expected) => {
            let err = result.unwrap_err();
            match expected.as_str().unwrap() {
                "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound"),
                "Invalid" => assert!(matches!(err, ApiError::Invalid { .. }), "{name}: expected Invalid"),
                "Http" => assert!(matches!(err, ApiError::Http { .. }), "{name}: expected Http"),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        }
        None => on_ok(result.unwrap()),
    }
}

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

#[test]
fn list_all_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/list_all.json")) {
        let name = case["name"].as_str().unwrap();
        assert_request(name, &c.build_list_all(), &case["expected_request"]);

        let result = c.parse_list_all(simulated(&case));
        assert_outcome(name, &case, result, |lists| {
            let expected: Vec<List> = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(lists, expected, "{name}: parsed result");
        });
    }
}

#[test]
fn create_list_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/create_list.json")) {
        let name = case["name"].as_str().unwrap();
        let input: NewList = serde_json::from_value(case["input"].clone()).unwrap();
        assert_request(name, &c.build_create_list(&input).unwrap(), &case["expected_request"]);

        let result = c.parse_create_list(simulated(&case));
        assert_outcome(name, &case, result, |id| {
            assert_eq!(Some(id), case["expected_result"].as_i64(), "{name}: parsed id");
        });
    }
}

// ---------------------------------------------------------------------------
// Todos
// ---------------------------------------------------------------------------

#[test]
fn create_todo_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/create_todo.json")) {
        let name = case["name"].as_str().unwrap();
        let list_id = case["input_list_id"].as_i64().unwrap();
        let input: NewTodo = serde_json::from_value(case["input"].clone()).unwrap();
        assert_request(name, &c.build_create_todo(list_id, &input).unwrap(), &case["expected_request"]);

        let result = c.parse_create_todo(simulated(&case));
        assert_outcome(name, &case, result, |id| {
            assert_eq!(Some(id), case["expected_result"].as_i64(), "{name}: parsed id");
        });
    }
}

#[test]
fn update_todo_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/update_todo.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_i64().unwrap();
        let input: TodoUpdate = serde_json::from_value(case["input"].clone()).unwrap();
        assert_request(name, &c.build_update_todo(id, &input).unwrap(), &case["expected_request"]);

        let result = c.parse_update_todo(simulated(&case));
        assert_outcome(name, &case, result, |()| {});
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_i64().unwrap();

        let (req, result) = match case["resource"].as_str().unwrap() {
            "list" => (c.build_delete_list(id), c.parse_delete_list(simulated(&case))),
            "todo" => (c.build_delete_todo(id), c.parse_delete_todo(simulated(&case))),
            other => panic!("{name}: unknown resource: {other}"),
        };
        assert_request(name, &req, &case["expected_request"]);
        assert_outcome(name, &case, result, |()| {});
    }
}
