//! Client core for the to-do lists API.
//!
//! # Overview
//! `ApiClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `TodoApi` wraps it
//! with a shared `reqwest` client and exposes one async method per endpoint.
//!
//! # Design
//! - `ApiClient` is stateless, it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and the parsers are testable with canned data.
//! - Failures are typed (`ApiError`), never sentinel values.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use api::TodoApi;
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, ErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{List, NewList, NewTodo, Todo, TodoUpdate};
