use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tokio::net::TcpListener;
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use squadlog::application::LedgerService;
use squadlog::http;
use squadlog::storage::{DynKvStore, MemoryStore, RedisStore, SqliteStore};

/// Squadlog - Squad Win Ledger
#[derive(Parser)]
#[command(name = "squadlog")]
#[command(about = "A squad-win ledger service backed by a pluggable key-value store")]
#[command(version)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "SQUADLOG_BIND", default_value = "127.0.0.1:8080")]
    bind: String,

    /// Key-value backend the ledger is persisted in
    #[arg(long, value_enum, default_value = "sqlite")]
    store: StoreKind,

    /// Database file path (sqlite backend)
    #[arg(short, long, default_value = "squadlog.db")]
    database: String,

    /// Redis connection URL (redis backend)
    #[arg(long, env = "REDIS_URL", default_value = "redis://127.0.0.1:6379")]
    redis_url: String,

    /// Token required to delete wins; deletion is unauthenticated when unset
    #[arg(long, env = "ADMIN_DELETE_TOKEN")]
    admin_token: Option<String>,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StoreKind {
    Sqlite,
    Redis,
    Memory,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = open_store(&args).await?;
    let service = Arc::new(LedgerService::new(store, args.admin_token.clone()));
    let app = http::router(service);

    let listener = TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;
    info!(addr = %args.bind, store = ?args.store, "Squad win ledger listening");

    let mut sigterm = signal(SignalKind::terminate()).context("Failed to register SIGTERM")?;
    let mut sigint = signal(SignalKind::interrupt()).context("Failed to register SIGINT")?;
    let shutdown = async move {
        tokio::select! {
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down"),
            _ = sigint.recv() => info!("Received SIGINT, shutting down"),
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    Ok(())
}

async fn open_store(args: &Args) -> Result<DynKvStore> {
    let store: DynKvStore = match args.store {
        StoreKind::Sqlite => {
            let db_url = format!("sqlite:{}?mode=rwc", args.database);
            Arc::new(SqliteStore::init(&db_url).await?)
        }
        StoreKind::Redis => Arc::new(RedisStore::connect(&args.redis_url).await?),
        StoreKind::Memory => Arc::new(MemoryStore::new()),
    };
    Ok(store)
}
