use std::net::SocketAddr;

use tracing::{info, warn};

use chirpy_api::{AppStateInner, Config, router};
use chirpy_db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "chirpy_server=debug,chirpy_api=debug,chirpy_db=debug,tower_http=debug".into()
            }),
        )
        .init();

    // Config
    let config = Config::from_env()?;

    // Init database
    let db = Database::open(&config.db_path)?;

    info!(
        "Platform '{}', admin reset {}",
        config.platform,
        if config.reset_allowed() { "enabled" } else { "disabled" }
    );
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Serving static files from {}", config.static_dir.display());

    // Shared state
    let state = AppStateInner::new(config, db);
    if state.blocklist.is_empty() {
        warn!("Blocklist is empty, chirps will not be censored");
    }
    info!(
        "Max chirp length {} characters, {} blocklisted words",
        state.config.max_body_length,
        state.blocklist.len()
    );
    let app = router::app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Chirpy server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(signal) => signal,
                Err(e) => {
                    warn!("Failed to install SIGTERM handler: {}", e);
                    ctrl_c.await.ok();
                    info!("Received Ctrl+C, shutting down...");
                    return;
                }
            };
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
