// rest/routes/tasks.rs — task CRUD routes.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::store::Task;
use crate::AppContext;

/// Serialize `value` pretty-printed (2-space indent) with a JSON content
/// type. Listing and single-task responses both go through here so the wire
/// format stays uniform.
fn pretty_json<T: Serialize>(value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// An empty-bodied response that still advertises JSON, matching the
/// original service's contract for Create and Delete.
fn empty_json(status: StatusCode) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")]).into_response()
}

/// GET /tasks — every task in the store, keyed by ID.
pub async fn list_tasks(State(ctx): State<Arc<AppContext>>) -> Result<Response, ApiError> {
    let tasks = ctx.store.list().await;
    pretty_json(&tasks)
}

/// POST /tasks — insert or overwrite the task under the key from the body's
/// own `id` field.
///
/// The body is decoded by hand rather than via the `Json` extractor so that
/// malformed JSON maps to 400 with the decoder's error text, and so that no
/// validation beyond JSON shape is applied.
pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let task: Task =
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    ctx.store.put(task).await;
    Ok(empty_json(StatusCode::CREATED))
}

/// GET /tasks/{id} — one task, or 400 if the ID is unknown.
pub async fn get_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    match ctx.store.get(&id).await {
        Some(task) => pretty_json(&task),
        None => Err(ApiError::TaskNotFound(id)),
    }
}

/// DELETE /tasks/{id} — remove a task, or 400 if the ID is unknown.
pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    match ctx.store.delete(&id).await {
        Some(_) => Ok(empty_json(StatusCode::OK)),
        None => Err(ApiError::TaskNotFound(id)),
    }
}
