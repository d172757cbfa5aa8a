use crate::error::ConfigError;
use crate::load_config;
use crate::settings::Config;
use std::path::PathBuf;

/// Command-line flags shared by every subcommand that needs configuration.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Path to a TOML configuration file. Defaults to `./config.toml` when present.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Directory holding the SQL migration files, applied in filename order.
    #[arg(long)]
    pub migrations: Option<PathBuf>,
}

impl ConfigArgs {
    /// Loads the layered configuration and applies the command-line overrides on top.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let mut config = load_config(self.config.as_deref())?;
        if let Some(directory) = &self.migrations {
            config.migrations.directory = directory.clone();
        }
        Ok(config)
    }
}
