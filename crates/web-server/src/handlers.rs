use crate::{error::AppError, AppState};
use crate::models::{CreateNoteRequest, NoteView, UpdateNoteRequest};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

/// # GET /notes/
pub async fn list_notes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<NoteView>>, AppError> {
    let notes = state.notes.list().await?;
    Ok(Json(notes))
}

/// # POST /notes/
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NoteView>), AppError> {
    let Json(request) = payload?;
    let note = state.notes.create(request).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// # PUT /notes/:id
/// The path id is taken verbatim so it can be compared with the body id.
pub async fn update_note(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Result<Json<NoteView>, AppError> {
    let Json(request) = payload?;
    let note = state.notes.update(&id, request).await?;
    Ok(Json(note))
}

/// # DELETE /notes/:id
pub async fn delete_note(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, AppError> {
    state.notes.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
