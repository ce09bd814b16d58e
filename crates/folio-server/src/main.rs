mod config;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use folio_api::AppStateInner;
use folio_api::routes;
use folio_store::Store;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_server=debug,folio_api=debug,folio_store=info,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    // Shared state; everything lives in memory for the life of the process
    let state = AppStateInner::new(Store::new());

    let mut app = routes::router(state);

    if let Some(dir) = &config.static_dir {
        if dir.is_dir() {
            // Unknown paths fall through to index.html so client-side routes resolve
            let serve = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
            app = app.fallback_service(serve);
            info!("Serving static files from {}", dir.display());
        } else {
            warn!("FOLIO_STATIC_DIR {} is not a directory, skipping", dir.display());
        }
    }

    let app: Router = app
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr()?;
    info!("Folio server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Folio server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
