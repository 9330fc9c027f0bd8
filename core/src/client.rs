//! Stateless HTTP request builder and response parser for the lists API.
//!
//! # Design
//! `ApiClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! `TodoApi` executes the round-trip in between; tests can feed canned
//! responses straight into the parsers.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{List, NewList, NewTodo, Todo, TodoUpdate};

/// Synchronous, stateless client for the lists API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -- lists --------------------------------------------------------------

    pub fn build_list_all(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/api/lists")
    }

    pub fn build_create_list(&self, input: &NewList) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "/api/lists", input)
    }

    pub fn build_delete_list(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/api/lists/{id}"))
    }

    pub fn parse_list_all(&self, response: HttpResponse) -> Result<Vec<List>, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    /// The body of a 201 is the bare id of the created list.
    pub fn parse_create_list(&self, response: HttpResponse) -> Result<i64, ApiError> {
        check_status(&response, 201)?;
        decode(&response.body)
    }

    pub fn parse_delete_list(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 200)
    }

    // -- todos --------------------------------------------------------------

    pub fn build_list_todos(&self, list_id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/api/todos/{list_id}"))
    }

    pub fn build_create_todo(&self, list_id: i64, input: &NewTodo) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, &format!("/api/todos/{list_id}"), input)
    }

    pub fn build_update_todo(&self, id: i64, input: &TodoUpdate) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, &format!("/api/todos/{id}"), input)
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/api/todos/{id}"))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<i64, ApiError> {
        check_status(&response, 201)?;
        decode(&response.body)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 200)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 200)
    }

    fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        s if s == expected => Ok(()),
        400 => Err(ApiError::Invalid {
            body: response.body.clone(),
        }),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::Http {
            status,
            body: response.body.clone(),
        }),
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
