use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;

use lotto_lib::connection::conn;
use lotto_lib::{DrawUseCase, OsDrawSource, SqliteDrawStore, api, config, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;
    logging::init_tracing(&config)?;

    tracing::info!("Let's roll some lotto numbers.");
    tracing::info!(database = %config.database_url, "opening draw store");

    let db_conn = conn(&config.database_url)?;
    let store = SqliteDrawStore::new(db_conn);

    let draw_use_case = DrawUseCase::new(Arc::new(store), Arc::new(OsDrawSource));
    let app = api::router(Arc::new(draw_use_case));

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })?;

    tracing::info!("shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
