//! Axum wiring for the `/tasks` endpoints.
//!
//! Path and body extraction failures are turned into 400 responses with a
//! `{"message": ...}` body here, so the controller only sees well-formed
//! input.

use std::fmt::Display;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;

use crate::controller::TodoController;
use crate::domain::TodoId;
use crate::error::ApiError;
use crate::models::{Message, TodoData, TodoJson};

type SharedController = Arc<TodoController>;

/// Builds the router serving every `/tasks` endpoint from `controller`.
pub fn router(controller: TodoController) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(controller))
}

fn rejected(rejection: impl Display) -> ApiError {
    tracing::warn!(%rejection, "rejecting malformed request");
    ApiError::bad_request(rejection.to_string())
}

fn todo_id(path: Result<Path<u64>, PathRejection>) -> Result<TodoId, ApiError> {
    let Path(id) = path.map_err(rejected)?;
    Ok(TodoId(id))
}

#[tracing::instrument(skip(controller))]
async fn create_task(
    State(controller): State<SharedController>,
    body: Result<Json<TodoData>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoJson>), ApiError> {
    let Json(data) = body.map_err(rejected)?;
    let created = controller.create(data)?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[tracing::instrument(skip(controller))]
async fn get_task(
    State(controller): State<SharedController>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<TodoJson>, ApiError> {
    let id = todo_id(path)?;
    Ok(Json(controller.get(id)?))
}

#[tracing::instrument(skip(controller))]
async fn list_tasks(State(controller): State<SharedController>) -> Json<Vec<TodoJson>> {
    Json(controller.list())
}

#[tracing::instrument(skip(controller))]
async fn update_task(
    State(controller): State<SharedController>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<TodoData>, JsonRejection>,
) -> Result<Json<TodoJson>, ApiError> {
    let id = todo_id(path)?;
    let Json(data) = body.map_err(rejected)?;
    Ok(Json(controller.update(id, data)?))
}

#[tracing::instrument(skip(controller))]
async fn delete_task(
    State(controller): State<SharedController>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
    let id = todo_id(path)?;
    Ok(Json(controller.delete(id)?))
}
