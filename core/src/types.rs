//! Data shapes exchanged with the to-do lists API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Decoding goes through these explicit serde schemas, so a payload with a
//! missing or mistyped field is rejected instead of being trusted as-is.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A named collection of to-do items.
///
/// `todos` is `None` when the server omits the detail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct List {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todos: Option<Vec<Todo>>,
}

/// A single to-do entry belonging to a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub description: String,
    pub complete: bool,
}

/// Request payload for creating a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewList {
    pub title: String,
}

/// Request payload for adding a todo to a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub description: String,
}

/// Request payload for changing a todo's completion flag, the only mutable
/// field of a todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoUpdate {
    pub complete: bool,
}
