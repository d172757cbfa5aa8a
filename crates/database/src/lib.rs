//! # Notes Database Crate
//!
//! This crate is the only place that knows about PostgreSQL. It opens the
//! connection pool, applies the startup migrations and exposes the note
//! repository to the rest of the application.
//!
//! ## Public API
//!
//! - `connect`: opens the connection pool from `DatabaseSettings` and pings it.
//! - `run_migrations`: executes the SQL files of a directory in filename order.
//! - `NoteStore`: the async trait the HTTP layer programs against.
//! - `NoteRepository`: the `PgPool`-backed `NoteStore`.
//! - `InMemoryNoteStore` (feature `memory`): a `NoteStore` for tests.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod migrations;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::connect;
pub use error::DbError;
#[cfg(any(test, feature = "memory"))]
pub use memory::InMemoryNoteStore;
pub use migrations::run_migrations;
pub use repository::{Note, NoteRepository, NoteStore};
pub use sqlx::PgPool;
