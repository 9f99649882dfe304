//! Staylist server binary.

use clap::{Parser, ValueEnum};
use staylist_database::{PostgresMarketStore, build_pool, run_migrations};
use staylist_error::{ConfigError, ServerError, ServerErrorKind};
use staylist_interface::MarketStore;
use staylist_server::{AppState, JwtKeys, MemoryMarketStore, ServerConfig, create_router};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Which backend holds the marketplace data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StoreBackend {
    /// PostgreSQL via Diesel
    Postgres,
    /// Volatile in-memory tables, for demos and smoke tests
    Memory,
}

/// Command-line arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "staylist-server")]
#[command(about = "Staylist marketplace REST API")]
#[command(version)]
struct Args {
    /// Path to server configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Bind address override, host:port
    #[arg(long)]
    addr: Option<String>,

    /// Store backend
    #[arg(long, value_enum, default_value = "postgres")]
    store: StoreBackend,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    staylist_core::init_telemetry()?;

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => {
            info!(config_file = ?path, "Loading configuration");
            ServerConfig::from_file(path)?
        }
        None => ServerConfig::from_env()?,
    };
    if let Some(database_url) = args.database_url {
        config.database_url = Some(database_url);
    }
    if let Some(addr) = args.addr {
        config.addr = addr;
    }

    let store: Arc<dyn MarketStore> = match args.store {
        StoreBackend::Memory => {
            info!("Using in-memory store");
            Arc::new(MemoryMarketStore::new())
        }
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .clone()
                .ok_or_else(|| ConfigError::new("database_url is not set"))?;
            let pool = build_pool(&database_url)?;
            let mut conn = pool.get()?;
            run_migrations(&mut conn)?;
            drop(conn);
            Arc::new(PostgresMarketStore::new(pool))
        }
    };

    let state = AppState::new(store, JwtKeys::new(&config.jwt_secret), config.page_size);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Bind(e.to_string())))?;
    info!(addr = %config.addr, "Staylist server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Io(e.to_string())))?;

    Ok(())
}
