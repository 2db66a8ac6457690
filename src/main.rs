//! Todo Board server: opens the SQLite database, creates the schema if needed and serves the
//! API and pages.

use todo_board::{app_router, connect_pool, ensure_todos_table, AppConfig, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("todo_board=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let pool = connect_pool(&config.database_url, config.max_connections).await?;
    ensure_todos_table(&pool).await?;

    let state = AppState::new(pool)?;
    let app = app_router(state, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
