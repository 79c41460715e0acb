//! HTTP server for the course catalog

pub mod error;
pub mod routes;

use crate::core::{Catalog, ConfigProvider, Result};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Catalog shared read-only by every request handler.
pub type SharedCatalog = Arc<Catalog>;

pub fn build_router(catalog: SharedCatalog) -> Router {
    with_error_handling(routes::catalog_routes().with_state(catalog))
}

/// Wraps a router with request tracing and the fixed 500 response for panicking handlers.
pub fn with_error_handling(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
}

/// Binds `host:port` from the config and serves until Ctrl-C.
pub async fn serve<C: ConfigProvider>(config: &C, catalog: SharedCatalog) -> Result<()> {
    let addr = format!("{}:{}", config.host(), config.port());
    let listener = TcpListener::bind(&addr).await?;

    serve_listener(listener, catalog, shutdown_signal()).await
}

pub async fn serve_listener<F>(listener: TcpListener, catalog: SharedCatalog, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;
    tracing::info!("🚀 Server listening at http://{}", local_addr);

    axum::serve(listener, build_router(catalog))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server on {} stopped", local_addr);
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            // 無法監聽訊號時就一直執行下去
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
