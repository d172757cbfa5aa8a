use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid database connection settings: {0}")]
    ConnectionConfigError(String),

    #[error("Error while opening the database: {0}")]
    ConnectionError(#[source] sqlx::Error),

    #[error("Error while pinging the database: {0}")]
    PingError(#[source] sqlx::Error),

    #[error("Error while reading migration {path}: {source}")]
    MigrationRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error while executing migration file {file}: {source}")]
    Migration {
        file: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("A note with this name already exists.")]
    AlreadyExists,

    #[error("The requested note was not found in the database.")]
    NotFound,

    #[error("Query failed: {0}")]
    Query(#[source] sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    /// Classifies driver errors raised by repository queries.
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => DbError::NotFound,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DbError::AlreadyExists
            }
            _ => DbError::Query(err),
        }
    }
}
