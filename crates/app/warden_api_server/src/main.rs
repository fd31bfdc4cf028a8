//! Warden API server binary.
//!
//! Loads configuration from the environment, connects to PostgreSQL, runs
//! migrations and serves the HTTP API until interrupted.

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;
use warden_api::AppState;
use warden_api::config::ApiConfig;

/// CLI arguments for the API server.
///
/// Secrets and the database URL are read by [`ApiConfig::from_env`], not flags,
/// so they never show up in process listings.
#[derive(Parser, Debug)]
#[command(name = "warden_api_server", about = "Warden identity and profile API server")]
struct Args {
    /// Address to bind the HTTP listener.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3100")]
    bind: String,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,

    /// Skip running embedded migrations at startup.
    #[arg(long, default_value_t = false)]
    skip_migrations: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,warden_api=debug,warden_core=debug")),
        )
        .init();

    let args = Args::parse();

    // Fail before touching the network if anything required is missing.
    let config = ApiConfig::from_env()?;

    info!(
        bind = %args.bind,
        token_lifetime_secs = config.token_lifetime.num_seconds(),
        max_connections = args.max_connections,
        "starting warden_api_server"
    );

    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&config.database_url)
        .await?;

    if args.skip_migrations {
        info!("skipping database migrations");
    } else {
        info!("running database migrations");
        warden_api::migrate(&pool).await?;
    }

    let app = warden_api::router(AppState::postgres(&config, pool));

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
