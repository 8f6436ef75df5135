//! Serve the router until a shutdown signal, then drain in-flight requests for a bounded time.

use axum::Router;
use std::future::Future;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinError;

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("server failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("server task panicked or was cancelled: {0}")]
    Join(#[from] JoinError),
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Run `app` on `listener` until `signal` resolves. After the signal the listener stops accepting and
/// in-flight requests get `grace` to finish; whatever is still running then is abandoned.
/// Returns early with the error if the server fails before any signal.
pub async fn serve<S>(
    listener: TcpListener,
    app: Router,
    signal: S,
    grace: Duration,
) -> Result<(), ServerError>
where
    S: Future<Output = ()> + Send + 'static,
{
    let (stop_tx, mut stop_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = stop_rx.changed().await;
    });
    let mut handle = tokio::spawn(async move { server.await });

    tokio::select! {
        res = &mut handle => {
            res??;
            return Ok(());
        }
        _ = signal => {}
    }

    tracing::info!(grace_secs = grace.as_secs_f64(), "shutting down the server");
    let _ = stop_tx.send(true);

    match tokio::time::timeout(grace, &mut handle).await {
        Ok(res) => {
            res??;
            tracing::info!("server drained");
        }
        Err(_) => {
            handle.abort();
            tracing::warn!("shutdown timeout elapsed, abandoning in-flight requests");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use std::time::Instant;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::sync::oneshot;

    async fn bind() -> (TcpListener, std::net::SocketAddr) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        (listener, addr)
    }

    async fn send_get(addr: std::net::SocketAddr, path: &str) -> String {
        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        let req = format!("GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n", path);
        stream.write_all(req.as_bytes()).await.unwrap();
        let mut buf = String::new();
        stream.read_to_string(&mut buf).await.unwrap();
        buf
    }

    #[tokio::test]
    async fn stops_after_signal_when_idle() {
        let (listener, addr) = bind().await;
        let app = Router::new().route("/ping", get(|| async { "pong" }));
        let (tx, rx) = oneshot::channel::<()>();
        let server = tokio::spawn(serve(
            listener,
            app,
            async move {
                let _ = rx.await;
            },
            Duration::from_secs(5),
        ));

        let reply = send_get(addr, "/ping").await;
        assert!(reply.starts_with("HTTP/1.1 200"));
        assert!(reply.ends_with("pong"));

        tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn abandons_requests_past_the_grace_period() {
        let (listener, addr) = bind().await;
        let app = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                "done"
            }),
        );
        let (tx, rx) = oneshot::channel::<()>();
        let server = tokio::spawn(serve(
            listener,
            app,
            async move {
                let _ = rx.await;
            },
            Duration::from_millis(200),
        ));

        let client = tokio::spawn(async move {
            let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
            stream
                .write_all(b"GET /slow HTTP/1.1\r\nHost: localhost\r\n\r\n")
                .await
                .unwrap();
            let mut buf = Vec::new();
            let _ = stream.read_to_end(&mut buf).await;
        });
        tokio::time::sleep(Duration::from_millis(100)).await;

        let started = Instant::now();
        tx.send(()).unwrap();
        server.await.unwrap().unwrap();
        assert!(started.elapsed() < Duration::from_secs(5));
        client.abort();
    }
}
