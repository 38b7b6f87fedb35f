use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::app::App;
use crate::error::ServeError;
use crate::state::AppState;

/// Binds `listen_addr` and serves redirects until the process exits.
pub async fn serve(listen_addr: SocketAddr, state: AppState) -> Result<(), ServeError> {
    let listener = TcpListener::bind(listen_addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: listen_addr,
            source,
        })?;

    serve_on(listener, state).await
}

/// Serves redirects on an already bound listener.
pub async fn serve_on(listener: TcpListener, state: AppState) -> Result<(), ServeError> {
    let local_addr = listener.local_addr().map_err(ServeError::Serve)?;
    info!(listen_addr = %local_addr, "starting redirect server");

    axum::serve(listener, App::router(state))
        .await
        .map_err(ServeError::Serve)
}
