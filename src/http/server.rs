//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, cache policy)
//! - Build the immutable registry and process-lifetime QR cache
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServeConfig;
use crate::http::cache_policy::apply_cache_policy;
use crate::http::handlers;
use crate::http::request::request_id_layer;
use crate::links::registry::Registry;
use crate::qr::QrCache;
use crate::scrape::ScrapeClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub qr: QrCache,
    pub scrape: Arc<ScrapeClient>,
}

/// HTTP server for the link service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServeConfig) -> Self {
        let registry = Arc::new(Registry::build(&config.link_values(), &config.links.custom));
        tracing::info!(entries = registry.entries().len(), "Link registry built");

        let state = AppState {
            registry,
            qr: QrCache::new(),
            scrape: Arc::new(ScrapeClient::new(config.scrape.clone())),
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(config: &ServeConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", get(handlers::list_links))
            .route("/qr", get(handlers::list_links_qr))
            .route("/robots.txt", get(handlers::robots))
            .route("/sitemap.xml", get(handlers::sitemap));

        if config.scrape.enabled {
            router = router.route("/api/lote", get(handlers::scrape_proxy));
        }

        router
            .route("/{slug}", get(handlers::redirect_slug))
            .with_state(state)
            .layer(middleware::from_fn(apply_cache_policy))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(request_id_layer())
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
