use crate::error::AppError;
use crate::models::{parse_note_id, CreateNoteRequest, NoteView, UpdateNoteRequest};
use database::NoteStore;
use std::sync::Arc;

/// The note use cases behind the HTTP routes, free of any axum types so they
/// can be driven directly in tests.
#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<NoteView>, AppError> {
        let notes = self.store.list_all().await?;
        Ok(notes.into_iter().map(NoteView::from).collect())
    }

    pub async fn create(&self, request: CreateNoteRequest) -> Result<NoteView, AppError> {
        request.validate()?;
        let note = self.store.create(&request.name, &request.content).await?;
        tracing::info!(note_id = %note.id, "Note created.");
        Ok(note.into())
    }

    /// Updates the note addressed by `path_id`, which the body id must repeat.
    pub async fn update(
        &self,
        path_id: &str,
        request: UpdateNoteRequest,
    ) -> Result<NoteView, AppError> {
        let id = request.validate(path_id)?;
        let note = self
            .store
            .update(id, &request.name, &request.content)
            .await?;
        tracing::info!(note_id = %note.id, "Note updated.");
        Ok(note.into())
    }

    pub async fn delete(&self, path_id: &str) -> Result<(), AppError> {
        let id = parse_note_id(path_id)?;
        self.store.delete(id).await?;
        tracing::info!(note_id = %id, "Note deleted.");
        Ok(())
    }
}
