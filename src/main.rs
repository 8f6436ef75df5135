//! Students API server: loads config, opens the SQLite store, serves until SIGINT/SIGTERM.

use std::process::ExitCode;
use std::sync::Arc;
use students_api::{app, config, serve, shutdown_signal, AppState, SqliteStore};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("students_api=info,tower_http=info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fatal");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load()?;

    let store = SqliteStore::open(&config.storage_path).await?;
    tracing::info!(
        env = %config.env,
        version = env!("CARGO_PKG_VERSION"),
        storage = %config.storage_path.display(),
        "storage initialized"
    );

    let state = AppState::new(Arc::new(store));
    let listener = TcpListener::bind(&config.http_server.address).await?;
    tracing::info!(address = %listener.local_addr()?, "server started");

    serve(
        listener,
        app(state),
        shutdown_signal(),
        config.http_server.shutdown_timeout(),
    )
    .await?;
    tracing::info!("server shutdown successfully");
    Ok(())
}
