//! HTTP server lifecycle: binding, serving, graceful shutdown.

use std::future::Future;
use std::io;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

/// Binds the listener and serves the router until a shutdown signal.
///
/// # Errors
///
/// Returns an [`io::Error`] when the address cannot be bound, signal
/// handlers cannot be registered, or the server fails while running.
pub async fn serve(router: Router, bind: SocketAddr) -> io::Result<()> {
    let listener = TcpListener::bind(bind).await?;
    let shutdown = shutdown_signal()?;
    info!("listening on {bind}");
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
}

/// Registers signal handlers and returns a future that resolves on the
/// first interrupt or terminate signal.
#[cfg(unix)]
fn shutdown_signal() -> io::Result<impl Future<Output = ()>> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    Ok(async move {
        tokio::select! {
            _ = interrupt.recv() => {}
            _ = terminate.recv() => {}
        }
        info!("shutdown signal received");
    })
}

/// Registers a ctrl-c handler and returns a future that resolves when it
/// fires.
#[cfg(not(unix))]
fn shutdown_signal() -> io::Result<impl Future<Output = ()>> {
    Ok(async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %error, "interrupt handler failed");
        }
        info!("shutdown signal received");
    })
}
