// ABOUTME: HTTP request handlers for note operations
// ABOUTME: Plain CRUD with the same id resolution rules as tasks

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use carryover_notes::Note;
use serde_json::{json, Value};
use tracing::info;

use crate::error::ApiResult;
use crate::request::{
    parse_body, resolve_id, CreateNoteRequest, DeleteRequest, IdQuery, UpdateNoteRequest,
    ValidQuery,
};
use crate::state::AppState;

const NOTE_ID: &str = "Note id";

pub async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<Vec<Note>>> {
    info!("Listing notes");
    Ok(Json(state.note_storage.list_notes().await?))
}

pub async fn create_note(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let input = parse_body::<CreateNoteRequest>(&body)?.into_input()?;
    info!("Creating note");

    let note = state.note_storage.create_note(input).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn update_note(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<IdQuery>,
    body: Bytes,
) -> ApiResult<Json<Note>> {
    apply_update(state, None, query, body).await
}

pub async fn update_note_by_path(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    ValidQuery(query): ValidQuery<IdQuery>,
    body: Bytes,
) -> ApiResult<Json<Note>> {
    apply_update(state, Some(note_id), query, body).await
}

async fn apply_update(
    state: AppState,
    path_id: Option<String>,
    query: IdQuery,
    body: Bytes,
) -> ApiResult<Json<Note>> {
    let mut request = parse_body::<UpdateNoteRequest>(&body)?;
    let note_id = resolve_id(
        NOTE_ID,
        path_id.as_deref(),
        &query,
        request.id.take().as_deref(),
    )?;
    let input = request.into_input()?;
    info!("Updating note: {}", note_id);

    Ok(Json(state.note_storage.update_note(&note_id, input).await?))
}

pub async fn delete_note(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<IdQuery>,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    apply_delete(state, None, query, body).await
}

pub async fn delete_note_by_path(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    ValidQuery(query): ValidQuery<IdQuery>,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    apply_delete(state, Some(note_id), query, body).await
}

async fn apply_delete(
    state: AppState,
    path_id: Option<String>,
    query: IdQuery,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let request = parse_body::<DeleteRequest>(&body)?;
    let note_id = resolve_id(NOTE_ID, path_id.as_deref(), &query, request.id.as_deref())?;
    info!("Deleting note: {}", note_id);

    state.note_storage.delete_note(&note_id).await?;
    Ok(Json(json!({ "ok": true })))
}
