//! Serves the Agendum task manager over HTTP.
//!
//! Usage:
//!
//! ```text
//! server [--database-path task.db] [--bind 127.0.0.1:5000] [--log info]
//! ```
//!
//! Each flag can also be supplied through its environment variable
//! (`AGENDUM_DATABASE_PATH`, `AGENDUM_BIND`, and `AGENDUM_LOG`). The
//! database file and its `tasks` table are created on first run.

use std::net::SocketAddr;
use std::sync::Arc;

use agendum::task::adapters::sqlite::{SqliteTaskRepository, build_pool};
use agendum::web::{AppState, ViewEngine, build_router, serve};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Command-line settings for the task manager server.
#[derive(Debug, Parser)]
#[command(name = "agendum", about = "Web-based task manager", version)]
struct Args {
    /// Path of the `SQLite` database file.
    #[arg(long, env = "AGENDUM_DATABASE_PATH", default_value = "task.db")]
    database_path: String,

    /// Socket address to listen on.
    #[arg(long, env = "AGENDUM_BIND", default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Log filter directives (trace, debug, info, warn, error).
    #[arg(long, env = "AGENDUM_LOG", default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .init();

    let pool = build_pool(&args.database_path)?;
    let repository = SqliteTaskRepository::new(pool);
    repository.ensure_schema().await?;

    let views = ViewEngine::new()?;
    let state = AppState::new(Arc::new(repository), views);
    serve(build_router(state), args.bind).await?;
    Ok(())
}
