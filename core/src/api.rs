//! Async access functions over a shared `reqwest` client.
//!
//! # Design
//! Every method issues exactly one request: build with `ApiClient`, execute
//! with `reqwest`, parse with `ApiClient`. Outcomes are logged through
//! `tracing` (success at `info`, failures at `error`) and returned as
//! `Result`, so callers can tell a missing list from a rejected title from
//! an unreachable server. Nothing is retried or cached.

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{List, NewList, NewTodo, Todo, TodoUpdate};

/// Handle to the remote lists API. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct TodoApi {
    http: reqwest::Client,
    client: ApiClient,
}

impl TodoApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::with_http_client(config, http))
    }

    pub fn with_http_client(config: &ClientConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            client: ApiClient::new(&config.base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// `GET /api/lists`
    pub async fn list_all(&self) -> Result<Vec<List>, ApiError> {
        let result = self
            .send(self.client.build_list_all())
            .await
            .and_then(|r| self.client.parse_list_all(r));
        match &result {
            Ok(lists) => tracing::info!(count = lists.len(), "fetched all lists"),
            Err(e) => tracing::error!(error = %e, "could not fetch all lists"),
        }
        result
    }

    /// `POST /api/lists`, returning the id the server assigned.
    pub async fn create_list(&self, title: &str) -> Result<i64, ApiError> {
        let input = NewList {
            title: title.to_string(),
        };
        let result = self
            .send_built(self.client.build_create_list(&input))
            .await
            .and_then(|r| self.client.parse_create_list(r));
        match &result {
            Ok(id) => tracing::info!(id, "added list"),
            Err(ApiError::Invalid { .. }) => {
                tracing::error!(title, "could not add list (invalid title)")
            }
            Err(e) => tracing::error!(error = %e, "could not add list"),
        }
        result
    }

    /// `DELETE /api/lists/{id}`
    pub async fn delete_list(&self, id: i64) -> Result<(), ApiError> {
        let result = self
            .send(self.client.build_delete_list(id))
            .await
            .and_then(|r| self.client.parse_delete_list(r));
        match &result {
            Ok(()) => tracing::info!(id, "deleted list"),
            Err(ApiError::NotFound) => tracing::error!(id, "could not delete list (not found)"),
            Err(e) => tracing::error!(id, error = %e, "could not delete list"),
        }
        result
    }

    /// `GET /api/todos/{list_id}`
    pub async fn list_todos(&self, list_id: i64) -> Result<Vec<Todo>, ApiError> {
        let result = self
            .send(self.client.build_list_todos(list_id))
            .await
            .and_then(|r| self.client.parse_list_todos(r));
        match &result {
            Ok(todos) => tracing::info!(list_id, count = todos.len(), "fetched todos in list"),
            Err(ApiError::NotFound) => {
                tracing::error!(list_id, "could not fetch todos (list not found)")
            }
            Err(e) => tracing::error!(list_id, error = %e, "could not fetch todos"),
        }
        result
    }

    /// `POST /api/todos/{list_id}`, returning the id the server assigned.
    pub async fn create_todo(&self, list_id: i64, description: &str) -> Result<i64, ApiError> {
        let input = NewTodo {
            description: description.to_string(),
        };
        let result = self
            .send_built(self.client.build_create_todo(list_id, &input))
            .await
            .and_then(|r| self.client.parse_create_todo(r));
        match &result {
            Ok(id) => tracing::info!(list_id, id, "added todo to list"),
            Err(ApiError::Invalid { .. }) => {
                tracing::error!(list_id, "could not add todo to list (invalid description)")
            }
            Err(ApiError::NotFound) => {
                tracing::error!(list_id, "could not add todo to list (list not found)")
            }
            Err(e) => tracing::error!(list_id, error = %e, "could not add todo"),
        }
        result
    }

    /// `PUT /api/todos/{id}`
    pub async fn update_todo(&self, id: i64, complete: bool) -> Result<(), ApiError> {
        let result = self
            .send_built(self.client.build_update_todo(id, &TodoUpdate { complete }))
            .await
            .and_then(|r| self.client.parse_update_todo(r));
        match &result {
            Ok(()) => tracing::info!(id, complete, "updated todo"),
            Err(ApiError::NotFound) => tracing::error!(id, "could not update todo (not found)"),
            Err(e) => tracing::error!(id, error = %e, "could not update todo"),
        }
        result
    }

    /// `DELETE /api/todos/{id}`
    pub async fn delete_todo(&self, id: i64) -> Result<(), ApiError> {
        let result = self
            .send(self.client.build_delete_todo(id))
            .await
            .and_then(|r| self.client.parse_delete_todo(r));
        match &result {
            Ok(()) => tracing::info!(id, "deleted todo"),
            Err(ApiError::NotFound) => tracing::error!(id, "could not delete todo (not found)"),
            Err(e) => tracing::error!(id, error = %e, "could not delete todo"),
        }
        result
    }

    async fn send_built(
        &self,
        request: Result<HttpRequest, ApiError>,
    ) -> Result<HttpResponse, ApiError> {
        self.send(request?).await
    }

    /// Execute one request. Non-success statuses come back as data; only
    /// failures to get a response at all are errors here.
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = %req.method, url = %req.url, "sending request");
        let mut builder = self.http.request(req.method.into(), &req.url);
        for (key, value) in &req.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect();
        let body = response.text().await?;
        tracing::debug!(status, "received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
