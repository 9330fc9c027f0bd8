//! In-memory implementation of the to-do lists API.
//!
//! Mirrors the real backend closely enough to serve as the live peer for
//! the client's integration tests: integer ids assigned by the server, 400
//! for blank titles/descriptions or unreadable bodies, 404 for unknown ids,
//! and deleting a list removes its todos.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct List {
    pub id: i64,
    pub title: String,
    pub todos: Vec<Todo>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub description: String,
    pub complete: bool,
}

#[derive(Deserialize)]
pub struct NewList {
    pub title: String,
}

#[derive(Deserialize)]
pub struct NewTodo {
    pub description: String,
}

#[derive(Deserialize)]
pub struct TodoUpdate {
    pub complete: bool,
}

#[derive(Default)]
pub struct Store {
    lists: BTreeMap<i64, String>,
    todos: BTreeMap<i64, (i64, Todo)>,
    last_list_id: i64,
    last_todo_id: i64,
}

impl Store {
    fn todos_in(&self, list_id: i64) -> Vec<Todo> {
        self.todos
            .values()
            .filter(|(owner, _)| *owner == list_id)
            .map(|(_, todo)| todo.clone())
            .collect()
    }
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult<T> = Result<T, (StatusCode, String)>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/lists", get(list_lists).post(create_list))
        .route("/api/lists/{id}", delete(delete_list))
        // GET/POST take a list id, PUT/DELETE a todo id.
        .route(
            "/api/todos/{id}",
            get(list_todos)
                .post(create_todo)
                .put(update_todo)
                .delete(delete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn bad_request(message: impl Into<String>) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, message.into())
}

fn not_found() -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, String::new())
}

fn unreadable(rejection: JsonRejection) -> (StatusCode, String) {
    tracing::warn!(error = %rejection, "request body contains invalid formatting");
    bad_request(rejection.body_text())
}

async fn list_lists(State(db): State<Db>) -> Json<Vec<List>> {
    let store = db.read().await;
    let lists = store
        .lists
        .iter()
        .map(|(&id, title)| List {
            id,
            title: title.clone(),
            todos: store.todos_in(id),
        })
        .collect::<Vec<_>>();
    tracing::info!(count = lists.len(), "sending all lists");
    Json(lists)
}

async fn create_list(
    State(db): State<Db>,
    payload: Result<Json<NewList>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<i64>)> {
    let Json(input) = payload.map_err(unreadable)?;
    if input.title.trim().is_empty() {
        tracing::info!("invalid list, sending error message");
        return Err(bad_request("The specified list is invalid"));
    }
    let mut store = db.write().await;
    store.last_list_id += 1;
    let id = store.last_list_id;
    store.lists.insert(id, input.title);
    tracing::info!(id, "created list");
    Ok((StatusCode::CREATED, Json(id)))
}

async fn delete_list(State(db): State<Db>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    let mut store = db.write().await;
    if store.lists.remove(&id).is_none() {
        tracing::error!(id, "list does not exist");
        return Err(not_found());
    }
    store.todos.retain(|_, (owner, _)| *owner != id);
    tracing::info!(id, "deleted list");
    Ok(StatusCode::OK)
}

async fn list_todos(State(db): State<Db>, Path(list_id): Path<i64>) -> ApiResult<Json<Vec<Todo>>> {
    let store = db.read().await;
    if !store.lists.contains_key(&list_id) {
        tracing::error!(list_id, "list does not exist");
        return Err(not_found());
    }
    Ok(Json(store.todos_in(list_id)))
}

async fn create_todo(
    State(db): State<Db>,
    Path(list_id): Path<i64>,
    payload: Result<Json<NewTodo>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<i64>)> {
    let Json(input) = payload.map_err(unreadable)?;
    let mut store = db.write().await;
    if !store.lists.contains_key(&list_id) {
        tracing::error!(list_id, "list does not exist");
        return Err(not_found());
    }
    if input.description.trim().is_empty() {
        tracing::error!(list_id, "invalid todo, sending error message");
        return Err(bad_request("Todo is invalid"));
    }
    store.last_todo_id += 1;
    let id = store.last_todo_id;
    let todo = Todo {
        id,
        description: input.description,
        complete: false,
    };
    store.todos.insert(id, (list_id, todo));
    tracing::info!(list_id, id, "created todo");
    Ok((StatusCode::CREATED, Json(id)))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
    payload: Result<Json<TodoUpdate>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(input) = payload.map_err(unreadable)?;
    let mut store = db.write().await;
    let (_, todo) = store.todos.get_mut(&id).ok_or_else(|| {
        tracing::error!(id, "todo does not exist");
        not_found()
    })?;
    todo.complete = input.complete;
    tracing::info!(id, complete = input.complete, "updated todo");
    Ok(StatusCode::OK)
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    let mut store = db.write().await;
    if store.todos.remove(&id).is_none() {
        tracing::error!(id, "todo does not exist");
        return Err(not_found());
    }
    tracing::info!(id, "deleted todo");
    Ok(StatusCode::OK)
}
