//! REST surface for the todo service.
//!
//! # Overview
//! Maps the HTTP verbs/paths of the API onto `todo_core::TodoStore`
//! operations and translates their `Option`/`bool` results into status
//! codes. The store is injected as shared axum state; this crate holds no
//! state of its own.
//!
//! # Routes
//! - `GET    /items`      — list all items
//! - `GET    /items/{id}` — fetch one item, 404 when absent
//! - `POST   /items`      — create, 201 + `Location` header, 409 when the
//!   content already exists
//! - `PUT    /items/{id}` — replace an item's content, 404 when absent
//! - `DELETE /items/{id}` — delete one item, 404 when absent
//! - `DELETE /items`      — delete everything and reset the id counter

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;

use todo_core::{TodoDraft, TodoItem, TodoStore};

pub mod error;

pub use error::ApiError;

/// Shared handle to the one store owned by the running service.
pub type SharedStore = Arc<TodoStore>;

/// Build the router over the given store.
pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item).delete(delete_all_items))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(store)
}

/// Serve the API on the given listener until the server is shut down.
pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

async fn list_items(State(store): State<SharedStore>) -> Json<Vec<TodoItem>> {
    tracing::info!("retrieving all items");
    Json(store.list_all())
}

async fn get_item(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<Json<TodoItem>, ApiError> {
    tracing::info!(id, "retrieving item");
    store.find_by_id(id).map(Json).ok_or_else(|| {
        tracing::warn!(id, "unable to retrieve item");
        ApiError::NotFound
    })
}

async fn create_item(
    State(store): State<SharedStore>,
    Json(draft): Json<TodoDraft>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!(content = draft.content(), "creating new item");
    // The uniqueness gate lives here, not in the store.
    if store.exists_by_content(draft.content()) {
        tracing::warn!(
            content = draft.content(),
            "unable to create item, another item already has the same content"
        );
        return Err(ApiError::Conflict);
    }

    let created = store.create(&draft);
    let location = format!("/items/{}", created.id());
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

async fn update_item(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
    Json(draft): Json<TodoDraft>,
) -> Result<Json<TodoItem>, ApiError> {
    tracing::info!(id, content = draft.content(), "updating item");
    if !store.update(id, &draft) {
        tracing::warn!(id, "unable to update, item was not found");
        return Err(ApiError::NotFound);
    }
    // Re-read so the response reflects what the store now holds.
    store.find_by_id(id).map(Json).ok_or(ApiError::NotFound)
}

async fn delete_item(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(id, "deleting item");
    if store.delete_by_id(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        tracing::warn!(id, "unable to delete, item was not found");
        Err(ApiError::NotFound)
    }
}

async fn delete_all_items(State(store): State<SharedStore>) -> StatusCode {
    tracing::info!("deleting all items and resetting the id counter");
    store.delete_all();
    StatusCode::NO_CONTENT
}
