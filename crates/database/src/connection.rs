use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{Connection, PgPool};
use std::str::FromStr;
use std::time::Duration;

/// Establishes a connection pool to the PostgreSQL database.
///
/// The pool is opened with the configured parameters and then verified with a
/// ping round trip, so a returned pool is known to be reachable. The target
/// database must already exist; it is never created here.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    let options = connect_options(settings)?;

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect_with(options)
        .await
        .map_err(DbError::ConnectionError)?;

    ping(&pool).await?;

    tracing::info!(
        host = %settings.host,
        port = settings.port,
        database = %settings.name,
        "Successfully connected to the database."
    );
    Ok(pool)
}

/// Translates the settings into driver options. An empty password is omitted.
pub fn connect_options(settings: &DatabaseSettings) -> Result<PgConnectOptions, DbError> {
    let ssl_mode = PgSslMode::from_str(&settings.ssl_mode).map_err(|_| {
        DbError::ConnectionConfigError(format!("unsupported ssl_mode '{}'", settings.ssl_mode))
    })?;

    let options = PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .database(&settings.name)
        .username(&settings.user)
        .ssl_mode(ssl_mode);

    if settings.password.is_empty() {
        Ok(options)
    } else {
        Ok(options.password(&settings.password))
    }
}

async fn ping(pool: &PgPool) -> Result<(), DbError> {
    let mut conn = pool.acquire().await.map_err(DbError::PingError)?;
    conn.ping().await.map_err(DbError::PingError)
}
