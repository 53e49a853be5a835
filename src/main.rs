//! News Progress server entry point

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use news_progress::{
    config::Config,
    create_app,
    database::DatabaseManager,
    logging::{init_logging, log_startup},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Invalid configuration")?;

    init_logging(&config).context("Failed to initialize logging")?;
    log_startup(&config);
    config.log_config();

    let database = DatabaseManager::new(&config.database_url, config.max_connections).await?;
    database.migrate().await?;

    let addr = config.bind_address();
    let url = config.server_url();
    let app = create_app(Arc::new(config), database.clone());

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(url = %url, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, starting shutdown"),
        () = terminate => tracing::info!("Received SIGTERM, starting shutdown"),
    }
}
