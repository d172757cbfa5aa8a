use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
#[cfg(feature = "clap")]
pub mod cli;
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
#[cfg(feature = "clap")]
pub use cli::ConfigArgs;
pub use logging::init_logging;
pub use settings::{Config, DatabaseSettings, LoggingSettings, MigrationSettings, ServerSettings};

/// Prefix of the environment variables that override file settings,
/// e.g. `OPEN_NOTES_DATABASE__PORT=5433`.
pub const ENV_PREFIX: &str = "OPEN_NOTES";

/// File looked up in the working directory when no explicit path is given.
const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Loads the application configuration.
///
/// Sources are layered from lowest to highest precedence: built-in defaults,
/// the TOML file, then `OPEN_NOTES_*` environment variables (after `.env` has
/// been loaded). An explicit `path` must exist; the default `config.toml` is
/// optional.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    // A missing .env file is not an error.
    dotenvy::dotenv().ok();
    load_config_from(path, None)
}

/// Same as [`load_config`], but reads environment overrides from `env`
/// instead of the process environment when it is `Some`.
pub fn load_config_from(
    path: Option<&Path>,
    env: Option<config::Map<String, String>>,
) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path)
            .format(config::FileFormat::Toml)
            .required(true),
        None => config::File::new(DEFAULT_CONFIG_FILE, config::FileFormat::Toml).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .source(env),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port must be non-zero".to_string(),
        ));
    }
    if config.database.host.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "database.host must not be empty".to_string(),
        ));
    }
    if config.database.name.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "database.name must not be empty".to_string(),
        ));
    }
    if config.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "database.max_connections must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
