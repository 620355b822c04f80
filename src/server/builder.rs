//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::GraphQLExposure;
use super::host::ServerHost;
use super::router::build_health_routes;
use crate::config::BookshelfConfig;
use crate::core::service::BookService;
use crate::storage::InMemoryBookService;
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for the bookshelf HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(BookshelfConfig::from_yaml_file("bookshelf.yaml")?)
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: BookshelfConfig,
    book_service: Option<Arc<dyn BookService>>,
}

impl ServerBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self {
            config: BookshelfConfig::default(),
            book_service: None,
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: BookshelfConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this book service instead of one built from `store` config
    pub fn with_book_service(mut self, service: impl BookService + 'static) -> Self {
        self.book_service = Some(Arc::new(service));
        self
    }

    /// Build the transport-agnostic host
    ///
    /// Without an explicit service, an [`InMemoryBookService`] is created
    /// from the `store` config section.
    pub fn build_host(self) -> Result<ServerHost> {
        self.config
            .validate()
            .context("invalid bookshelf configuration")?;

        let book_service = match self.book_service {
            Some(service) => service,
            None => Arc::new(
                InMemoryBookService::from_config(&self.config.store)
                    .context("failed to initialize the book store")?,
            ),
        };

        Ok(ServerHost::new(book_service, self.config))
    }

    /// Build the final router: health, GraphQL, tracing and CORS layers
    pub fn build(self) -> Result<Router> {
        let host = Arc::new(self.build_host()?);
        Self::router_for(host)
    }

    fn router_for(host: Arc<ServerHost>) -> Result<Router> {
        let mut app = Router::new()
            .merge(build_health_routes(host.clone()))
            .merge(GraphQLExposure::build_router(host.clone())?)
            .layer(TraceLayer::new_for_http());

        if host.config.server.cors {
            app = app.layer(CorsLayer::permissive());
        }

        Ok(app)
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds the configured `server.host:server.port` and stops on SIGTERM
    /// or Ctrl+C.
    pub async fn serve(self) -> Result<()> {
        let host = Arc::new(self.build_host()?);
        let addr = host.config.listen_addr();
        let graphql_path = host.config.graphql.path.clone();
        let app = Self::router_for(host)?;

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;

        tracing::info!(addr = %addr, graphql = %graphql_path, "Server listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
