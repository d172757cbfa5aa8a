use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, put},
    Router,
};
use configuration::Config;
use database::{NoteRepository, NoteStore};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod cors;
pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

use service::NoteService;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub notes: NoteService,
}

impl AppState {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self {
            notes: NoteService::new(store),
        }
    }
}

/// Builds the router with every route and middleware layer attached.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .route(
            "/notes/",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route(
            "/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route(
            "/notes/:id",
            put(handlers::update_note).delete(handlers::delete_note),
        )
        .with_state(Arc::new(state))
        .layer(cors::cors_layer())
        // Logs every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(middleware::from_fn(cors::answer_options))
}

/// Connects to the database, applies the migrations and serves the API
/// until Ctrl-C is received.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    // Note: tracing is initialised by the binary before this is called.
    let db_pool = database::connect(&config.database).await?;
    database::run_migrations(&db_pool, &config.migrations.directory).await?;
    let repository = NoteRepository::new(db_pool);

    let app = app(
        AppState::new(Arc::new(repository)),
        config.server.body_limit_bytes,
    );

    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server started and listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
        std::future::pending::<()>().await;
    }
}
