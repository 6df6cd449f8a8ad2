// ABOUTME: HTTP request handlers for task operations
// ABOUTME: View listing with rollover, create, patch (including completion), and delete

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use carryover_tasks::{Task, TaskView};
use serde_json::{json, Value};
use tracing::info;

use crate::error::ApiResult;
use crate::request::{
    parse_body, resolve_id, CreateTaskRequest, DeleteRequest, IdQuery, UpdateTaskRequest,
    ValidQuery, ViewQuery,
};
use crate::state::AppState;

const TASK_ID: &str = "Task id";

/// List tasks for a view (default today)
pub async fn list_tasks(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ViewQuery>,
) -> ApiResult<Json<Vec<Task>>> {
    let view = TaskView::from_param(query.view.as_deref());
    let today = state.clock.today();
    info!("Listing tasks: view={} today={}", view.as_str(), today);

    let tasks = state.task_storage.list_view(view, today).await?;
    Ok(Json(tasks))
}

/// Create a new task
pub async fn create_task(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let input = parse_body::<CreateTaskRequest>(&body)?.into_input()?;
    info!("Creating task '{}'", input.text);

    let task = state.task_storage.create_task(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Update a task identified by query or body
pub async fn update_task(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<IdQuery>,
    body: Bytes,
) -> ApiResult<Json<Task>> {
    apply_update(state, None, query, body).await
}

/// Update a task identified by path
pub async fn update_task_by_path(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    ValidQuery(query): ValidQuery<IdQuery>,
    body: Bytes,
) -> ApiResult<Json<Task>> {
    apply_update(state, Some(task_id), query, body).await
}

async fn apply_update(
    state: AppState,
    path_id: Option<String>,
    query: IdQuery,
    body: Bytes,
) -> ApiResult<Json<Task>> {
    let mut request = parse_body::<UpdateTaskRequest>(&body)?;
    let task_id = resolve_id(
        TASK_ID,
        path_id.as_deref(),
        &query,
        request.id.take().as_deref(),
    )?;
    let input = request.into_input()?;
    info!("Updating task: {}", task_id);

    let task = state.task_storage.update_task(&task_id, input).await?;
    Ok(Json(task))
}

/// Delete a task identified by query or body
pub async fn delete_task(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<IdQuery>,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    apply_delete(state, None, query, body).await
}

/// Delete a task identified by path
pub async fn delete_task_by_path(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    ValidQuery(query): ValidQuery<IdQuery>,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    apply_delete(state, Some(task_id), query, body).await
}

async fn apply_delete(
    state: AppState,
    path_id: Option<String>,
    query: IdQuery,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let request = parse_body::<DeleteRequest>(&body)?;
    let task_id = resolve_id(TASK_ID, path_id.as_deref(), &query, request.id.as_deref())?;
    info!("Deleting task: {}", task_id);

    state.task_storage.delete_task(&task_id).await?;
    Ok(Json(json!({ "ok": true })))
}
