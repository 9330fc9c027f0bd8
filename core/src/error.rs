//! Error types for the to-do lists API client.
//!
//! # Design
//! The server signals bad input with 400 and missing resources with 404, so
//! both get dedicated variants. Every other non-success status lands in
//! `Http` with the raw status code and body. Network failures never reach
//! the status dispatch and are reported as `Transport`.

use thiserror::Error;

/// Errors returned by `ApiClient` parse methods and `TodoApi` calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the list or todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400: the title, description or body was rejected.
    #[error("invalid input: {body}")]
    Invalid { body: String },

    /// The server returned a non-success status other than 400 or 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never produced a response (connection refused, DNS,
    /// interrupted body).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Coarse classification of an `ApiError` for callers that only need to
/// decide how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Invalid,
    Transport,
    Unexpected,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::NotFound => ErrorKind::NotFound,
            ApiError::Invalid { .. } => ErrorKind::Invalid,
            ApiError::Transport(_) => ErrorKind::Transport,
            ApiError::Http { .. } | ApiError::Deserialization(_) | ApiError::Serialization(_) => {
                ErrorKind::Unexpected
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}
