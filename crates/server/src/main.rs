//! Advisor Registration server.
//!
//! Serves the Advisor CRUD API over the configured storage backend.

use advisor_persistence::backends::memory::InMemoryBackend;
use advisor_rest::{ServerConfig, StorageBackendMode, create_app_with_config, init_logging};
use clap::Parser;
use tracing::info;

#[cfg(feature = "sqlite")]
use advisor_persistence::backends::sqlite::SqliteBackend;

/// Creates and initializes a SQLite backend from the server configuration.
#[cfg(feature = "sqlite")]
fn create_sqlite_backend(config: &ServerConfig) -> anyhow::Result<SqliteBackend> {
    let db_path = config.database_url.as_deref().unwrap_or("advisors.db");
    info!(database = %db_path, "Initializing SQLite backend");

    let backend = if db_path == ":memory:" {
        SqliteBackend::in_memory()?
    } else {
        SqliteBackend::open(db_path)?
    };
    backend.init_schema()?;

    Ok(backend)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let backend_mode = config
        .storage_backend_mode()
        .map_err(|e| anyhow::anyhow!("Invalid storage backend configuration: {}", e))?;

    info!(
        port = config.port,
        host = %config.host,
        storage_backend = %backend_mode,
        "Starting Advisor Registration server"
    );

    match backend_mode {
        StorageBackendMode::Memory => start_memory(config).await,
        StorageBackendMode::Sqlite => start_sqlite(config).await,
    }
}

/// Starts the server on the process-local in-memory backend.
async fn start_memory(config: ServerConfig) -> anyhow::Result<()> {
    let app = create_app_with_config(InMemoryBackend::new(), config.clone());
    serve(app, &config).await
}

/// Starts the server with the SQLite backend.
#[cfg(feature = "sqlite")]
async fn start_sqlite(config: ServerConfig) -> anyhow::Result<()> {
    let backend = create_sqlite_backend(&config)?;
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when sqlite feature is not enabled.
#[cfg(not(feature = "sqlite"))]
async fn start_sqlite(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The sqlite backend requires the 'sqlite' feature. \
         Build with: cargo build -p advisor-server --features sqlite"
    )
}
