//! `event-schedule` entry-point.
//!
//! Available sub-commands:
//! - `serve`   — start the API server (the default when none is given).
//! - `migrate` — apply pending database migrations.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Development-mode diagnostics: request traces and query logs.
const DEFAULT_LOG_FILTER: &str = "info,api=debug,db=debug,tower_http=debug";

const DEFAULT_BIND: &str = "127.0.0.1:5555";

#[derive(Parser)]
#[command(
    name = "event-schedule",
    about = "Read-only API for events, sessions and speakers",
    version
)]
struct Cli {
    #[command(flatten)]
    store: StoreArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct StoreArgs {
    /// SQLite connection string.
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://app.db", global = true)]
    database_url: String,

    /// Pool ceiling.
    #[arg(long, default_value_t = 5, global = true)]
    max_connections: u32,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, default_value = DEFAULT_BIND)]
        bind: String,
        /// Apply pending migrations before listening.
        #[arg(long)]
        migrate: bool,
    },
    /// Run pending database migrations.
    Migrate,
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve { bind: DEFAULT_BIND.to_string(), migrate: false }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();
    let StoreArgs { database_url, max_connections } = cli.store;

    match cli.command.unwrap_or_default() {
        Command::Serve { bind, migrate } => {
            let pool = db::pool::create_pool(&database_url, max_connections)
                .await
                .with_context(|| format!("failed to connect to {database_url}"))?;
            if migrate {
                db::pool::run_migrations(&pool).await.context("migration failed")?;
            }
            info!("Starting API server on {bind}");
            api::serve(&bind, pool)
                .await
                .with_context(|| format!("server on {bind} failed"))?;
        }
        Command::Migrate => {
            info!("Running migrations against {database_url}");
            let pool = db::pool::create_pool(&database_url, 1)
                .await
                .with_context(|| format!("failed to connect to {database_url}"))?;
            db::pool::run_migrations(&pool).await.context("migration failed")?;
            info!("Migrations applied successfully");
        }
    }

    Ok(())
}
