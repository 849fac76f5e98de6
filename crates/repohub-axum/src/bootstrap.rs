//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. The record store is instantiated here and
//! handed to the router through [`ServerContext`].

use anyhow::Result;
use repohub_core::RepositoryService;
use repohub_store::StoreFactory;
use tokio::net::TcpListener;
use tracing::info;

/// Default port for the HTTP server.
pub const DEFAULT_PORT: u16 = 3333;

/// Default interface the HTTP server binds to.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind to.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Set the listening port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the interface to bind to.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// `host:port` string the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
///
/// Owns the record store for the lifetime of the server. Each call to
/// [`bootstrap`] yields an independent, empty store.
#[derive(Clone)]
pub struct ServerContext {
    /// Repository operations over the in-memory store.
    pub repositories: RepositoryService,
}

/// Build the server context with a fresh in-memory store.
pub fn bootstrap() -> ServerContext {
    ServerContext {
        repositories: StoreFactory::build_service(),
    }
}

/// Start the web server and run until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap();
    let app = crate::routes::create_router(ctx);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    let local = listener.local_addr()?;

    info!(address = %local, "repohub server listening on http://{}", local);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("repohub server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
