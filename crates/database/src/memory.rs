use crate::repository::{Note, NoteStore};
use crate::DbError;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A [`NoteStore`] kept in process memory, with the same uniqueness and
/// not-found behavior as the `notes` table.
#[derive(Debug, Default)]
pub struct InMemoryNoteStore {
    notes: RwLock<Vec<Note>>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for InMemoryNoteStore {
    async fn list_all(&self) -> Result<Vec<Note>, DbError> {
        Ok(self.notes.read().await.clone())
    }

    async fn create(&self, name: &str, content: &str) -> Result<Note, DbError> {
        let mut notes = self.notes.write().await;
        if notes.iter().any(|note| note.name == name) {
            return Err(DbError::AlreadyExists);
        }

        let note = Note {
            id: Uuid::new_v4(),
            name: name.to_string(),
            content: content.to_string(),
        };
        notes.push(note.clone());
        Ok(note)
    }

    async fn update(&self, id: Uuid, name: &str, content: &str) -> Result<Note, DbError> {
        let mut notes = self.notes.write().await;
        let index = notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(DbError::NotFound)?;
        if notes.iter().any(|note| note.id != id && note.name == name) {
            return Err(DbError::AlreadyExists);
        }

        let note = &mut notes[index];
        note.name = name.to_string();
        note.content = content.to_string();
        Ok(note.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        self.notes.write().await.retain(|note| note.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = InMemoryNoteStore::new();
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let store = InMemoryNoteStore::new();

        let first = store.create("first", "a").await.unwrap();
        let second = store.create("second", "b").await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.list_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn create_rejects_taken_name() {
        let store = InMemoryNoteStore::new();
        store.create("shopping", "milk").await.unwrap();

        let err = store.create("shopping", "eggs").await.unwrap_err();

        assert!(matches!(err, DbError::AlreadyExists));
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_keeps_id_and_replaces_fields() {
        let store = InMemoryNoteStore::new();
        let created = store.create("draft", "v1").await.unwrap();

        let updated = store.update(created.id, "final", "v2").await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "final");
        assert_eq!(updated.content, "v2");
        assert_eq!(store.list_all().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn update_may_keep_its_own_name() {
        let store = InMemoryNoteStore::new();
        let created = store.create("same", "v1").await.unwrap();

        let updated = store.update(created.id, "same", "v2").await.unwrap();

        assert_eq!(updated.content, "v2");
    }

    #[tokio::test]
    async fn update_rejects_name_of_another_note() {
        let store = InMemoryNoteStore::new();
        store.create("taken", "x").await.unwrap();
        let other = store.create("other", "y").await.unwrap();

        let err = store.update(other.id, "taken", "y").await.unwrap_err();

        assert!(matches!(err, DbError::AlreadyExists));
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let store = InMemoryNoteStore::new();
        store.create("taken", "x").await.unwrap();

        // Not found wins over a name clash, as no row is touched.
        let err = store.update(Uuid::new_v4(), "taken", "y").await.unwrap_err();

        assert!(matches!(err, DbError::NotFound));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = InMemoryNoteStore::new();
        let note = store.create("gone", "soon").await.unwrap();

        store.delete(note.id).await.unwrap();
        store.delete(note.id).await.unwrap();

        assert!(store.list_all().await.unwrap().is_empty());
    }
}
