use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use configuration::{Config, ConfigArgs};
use database::{connect, run_migrations, Note, NoteRepository, NoteStore};
use std::path::PathBuf;

/// The main entry point for the notes service.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve(ServeArgs::default()));

    let config = command.config_args().load().context("Failed to load configuration")?;
    let _log_guard = configuration::init_logging(&config.logging)?;

    // Execute the appropriate command
    match command {
        Commands::Serve(args) => handle_serve(args, config).await,
        Commands::Migrate(_) => handle_migrate(config).await,
        Commands::List(_) => handle_list(config).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A small CRUD service for notes backed by PostgreSQL.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Defaults to `serve` when omitted.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect, apply the migrations and serve the HTTP API.
    Serve(ServeArgs),
    /// Connect and apply the migrations, then exit.
    Migrate(MigrateArgs),
    /// Print every stored note.
    List(ListArgs),
}

#[derive(Parser, Default)]
struct ServeArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Address to listen on, overriding `server.host`.
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overriding `server.port`.
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Parser)]
struct MigrateArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

/// `list` never touches the migrations, so it only takes the config file.
#[derive(Parser)]
struct ListArgs {
    /// Path to a TOML configuration file. Defaults to `./config.toml` when present.
    #[arg(long, short)]
    config: Option<PathBuf>,
}

impl Commands {
    fn config_args(&self) -> ConfigArgs {
        match self {
            Commands::Serve(args) => args.config.clone(),
            Commands::Migrate(args) => args.config.clone(),
            Commands::List(args) => ConfigArgs {
                config: args.config.clone(),
                migrations: None,
            },
        }
    }
}

// ==============================================================================
// Command Handlers
// ==============================================================================

async fn handle_serve(args: ServeArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    web_server::run_server(config).await
}

async fn handle_migrate(config: Config) -> anyhow::Result<()> {
    let db_pool = connect(&config.database)
        .await
        .context("Failed to connect to the database")?;
    run_migrations(&db_pool, &config.migrations.directory)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Migrations applied.");
    Ok(())
}

async fn handle_list(config: Config) -> anyhow::Result<()> {
    let db_pool = connect(&config.database)
        .await
        .context("Failed to connect to the database")?;
    let notes = NoteRepository::new(db_pool).list_all().await?;

    println!("Number of notes: {}", notes.len());
    if !notes.is_empty() {
        println!("{}", notes_table(&notes));
    }
    Ok(())
}

fn notes_table(notes: &[Note]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Id", "Name", "Content"]);
    for note in notes {
        table.add_row(vec![
            note.id.to_string(),
            note.name.clone(),
            note.content.clone(),
        ]);
    }
    table
}
