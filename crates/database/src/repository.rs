use crate::DbError;
use async_trait::async_trait;
use sqlx::postgres::PgPool;
use sqlx::FromRow;
use uuid::Uuid;

/// Represents a row from the `notes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Note {
    pub id: Uuid,
    pub name: String,
    pub content: String,
}

/// Persistence operations on notes.
///
/// Implementations report a taken name as [`DbError::AlreadyExists`] and a
/// missing row on update as [`DbError::NotFound`]. Deleting a missing row is
/// not an error.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Every stored note. Empty when the table is empty.
    async fn list_all(&self) -> Result<Vec<Note>, DbError>;

    /// Stores a new note under a freshly generated id.
    async fn create(&self, name: &str, content: &str) -> Result<Note, DbError>;

    /// Replaces name and content of the note with the given id.
    async fn update(&self, id: Uuid, name: &str, content: &str) -> Result<Note, DbError>;

    async fn delete(&self, id: Uuid) -> Result<(), DbError>;
}

/// The `NoteRepository` is the PostgreSQL-backed [`NoteStore`]. Every
/// operation is a single parameterized round trip.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    /// Creates a new `NoteRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteStore for NoteRepository {
    async fn list_all(&self) -> Result<Vec<Note>, DbError> {
        let notes = sqlx::query_as::<_, Note>("SELECT id, name, content FROM notes")
            .fetch_all(&self.pool)
            .await
            .map_err(DbError::Query)?;
        Ok(notes)
    }

    async fn create(&self, name: &str, content: &str) -> Result<Note, DbError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (id, name, content)
            VALUES ($1, $2, $3)
            RETURNING id, name, content
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(note_id = %note.id, "Created note.");
        Ok(note)
    }

    async fn update(&self, id: Uuid, name: &str, content: &str) -> Result<Note, DbError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            UPDATE notes
            SET name = $2, content = $3
            WHERE id = $1
            RETURNING id, name, content
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(content)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DbError::NotFound)?;

        tracing::debug!(note_id = %note.id, "Updated note.");
        Ok(note)
    }

    async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DbError::Query)?;

        tracing::debug!(note_id = %id, rows = result.rows_affected(), "Deleted note.");
        Ok(())
    }
}
