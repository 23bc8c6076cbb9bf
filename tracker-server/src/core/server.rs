//! Server Implementation
//!
//! Router assembly and the HTTP listener lifecycle

use anyhow::Context;
use axum::{Router, middleware};
use std::net::SocketAddr;
use std::time::Duration;
use tower_http::cors::CorsLayer;

use crate::core::{Config, Result, ServerError, ServerState};
use crate::middleware::logging_middleware;

/// Full application router with state, CORS and request logging applied
///
/// Tests drive this directly with `tower::ServiceExt::oneshot`.
pub fn build_router(state: ServerState) -> Router {
    crate::api::build_app()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Serve until Ctrl-C, then drain in-flight requests for up to
    /// `shutdown_timeout_ms`
    pub async fn run(&self) -> Result<()> {
        let address = self.config.bind_address();
        let addr: SocketAddr = address
            .parse()
            .map_err(|source| ServerError::InvalidAddress {
                address: address.clone(),
                source,
            })?;

        let app = build_router(self.state.clone());

        let handle = axum_server::Handle::new();
        let shutdown_handle = handle.clone();
        let grace = Duration::from_millis(self.config.shutdown_timeout_ms);
        tokio::spawn(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
            shutdown_handle.graceful_shutdown(Some(grace));
        });

        tracing::info!("Task tracker API listening on {}", addr);

        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .with_context(|| format!("serving on {addr}"))?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(host: &str, port: u16) -> Server {
        let mut config = Config::with_overrides(port, false);
        config.http_host = host.to_string();
        let state = ServerState::empty(config.clone());
        Server::with_state(config, state)
    }

    #[tokio::test]
    async fn test_run_rejects_bad_address() {
        let err = server("not a host", 5001).run().await.unwrap_err();
        assert!(matches!(err, ServerError::InvalidAddress { .. }));
    }

    #[tokio::test]
    async fn test_run_reports_port_in_use() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = taken.local_addr().unwrap().port();

        let err = server("127.0.0.1", port).run().await.unwrap_err();
        assert!(matches!(err, ServerError::Internal(_)));
        assert!(err.to_string().contains("serving on 127.0.0.1"));
    }
}
