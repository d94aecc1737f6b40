//! Listener binding and the serve loop.

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::error::Result;

/// Bind the configured host and port.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    Ok(listener)
}

/// Serve the API on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("HTTP server listening on {}", addr);

    let router = create_router(state);
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await?;

    info!("HTTP server stopped");
    Ok(())
}
