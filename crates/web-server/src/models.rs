//! Request and response shapes of the notes API, and their field validation.

use database::Note;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const NAME_MAX_CHARS: usize = 50;

pub const NAME_LENGTH_MESSAGE: &str = "name: the length of name must be between 1 and 50";
pub const ID_MISMATCH_MESSAGE: &str = "id: should match url id";
pub const INVALID_ID_MESSAGE: &str = "id: must be a valid UUID";

/// The JSON projection of a stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteView {
    pub id: Uuid,
    pub name: String,
    pub content: String,
}

impl From<Note> for NoteView {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            name: note.name,
            content: note.content,
        }
    }
}

/// Body of `POST /notes/`. Missing fields decode as empty strings and are
/// then caught by validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
}

/// Body of `PUT /notes/:id`. The id is kept as text so it can be compared
/// with the path segment verbatim.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
}

/// Every field failure found in one request, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn single(message: impl Into<String>) -> Self {
        Self(vec![message.into()])
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    fn into_result(self) -> Result<(), Self> {
        if self.0.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("; "))
    }
}

fn check_name(name: &str, errors: &mut ValidationErrors) {
    let length = name.chars().count();
    if !(1..=NAME_MAX_CHARS).contains(&length) {
        errors.push(NAME_LENGTH_MESSAGE);
    }
}

/// Parses a note id taken from the URL.
pub fn parse_note_id(raw: &str) -> Result<Uuid, ValidationErrors> {
    Uuid::parse_str(raw).map_err(|_| ValidationErrors::single(INVALID_ID_MESSAGE))
}

impl CreateNoteRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_name(&self.name, &mut errors);
        errors.into_result()
    }
}

impl UpdateNoteRequest {
    /// Checks the name and that the body id matches `path_id`, returning the
    /// parsed id when everything holds.
    pub fn validate(&self, path_id: &str) -> Result<Uuid, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_name(&self.name, &mut errors);
        if self.id != path_id {
            errors.push(ID_MISMATCH_MESSAGE);
        }
        errors.into_result()?;

        parse_note_id(&self.id)
    }
}
