//! Startup schema setup.
//!
//! Every file in the migrations directory is executed once per start, in
//! filename order. Nothing records which files already ran, so starting
//! against an already-migrated database fails on the first `CREATE`.

use crate::error::DbError;
use sqlx::PgPool;
use std::fs;
use std::path::{Path, PathBuf};

/// A migration file loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    pub name: String,
    pub sql: String,
}

/// Lists and reads the regular files in `directory`, sorted by file name.
pub fn migration_files(directory: &Path) -> Result<Vec<MigrationFile>, DbError> {
    let read_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source| DbError::MigrationRead { path, source }
    };

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(directory).map_err(read_error(directory))? {
        let entry = entry.map_err(read_error(directory))?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    paths
        .into_iter()
        .map(|path| {
            let sql = fs::read_to_string(&path).map_err(read_error(&path))?;
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(MigrationFile { name, sql })
        })
        .collect()
}

/// Executes every migration file in `directory` against the pool.
///
/// Each file runs as a single raw SQL command, so it may hold several
/// statements. The first failing file aborts the remaining ones.
pub async fn run_migrations(pool: &PgPool, directory: &Path) -> Result<(), DbError> {
    let files = migration_files(directory)?;
    tracing::info!(
        directory = %directory.display(),
        count = files.len(),
        "Applying migrations."
    );

    for file in &files {
        sqlx::raw_sql(&file.sql)
            .execute(pool)
            .await
            .map_err(|source| DbError::Migration {
                file: file.name.clone(),
                source,
            })?;
        tracing::info!(file = %file.name, "Applied migration.");
    }

    Ok(())
}
