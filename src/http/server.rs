//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the person and country handlers
//! - Wire up middleware (request ID, tracing, metrics)
//! - Own the shared state handed to handlers
//! - Serve until the shutdown coordinator fires

use std::sync::Arc;

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::http::country::get_country;
use crate::http::middleware::track_metrics;
use crate::http::personnes::{create_personne, delete_personne, get_personne, list_personnes};
use crate::http::request::{request_id_of, UuidRequestId, X_REQUEST_ID};
use crate::legacy::CountryBridge;
use crate::lifecycle::shutdown;
use crate::lifecycle::StartupError;
use crate::store::{seed, PersonStore};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: PersonStore,
    pub bridge: Arc<CountryBridge>,
    pub strict_mode: bool,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
    store: PersonStore,
}

impl HttpServer {
    /// Create a server, seeding the store if configured to.
    pub fn new(config: GatewayConfig) -> Result<Self, StartupError> {
        let store = if config.store.seed_demo_records {
            PersonStore::with_records(seed::demo_records())
        } else {
            PersonStore::new()
        };
        Self::with_store(config, store)
    }

    /// Create a server around an existing store.
    pub fn with_store(config: GatewayConfig, store: PersonStore) -> Result<Self, StartupError> {
        let bridge = Arc::new(CountryBridge::from_config(&config.legacy)?);

        let state = AppState {
            store: store.clone(),
            bridge,
            strict_mode: config.api.strict_mode,
        };

        let router = Self::build_router(state);
        Ok(Self {
            router,
            config,
            store,
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/personnes", get(list_personnes))
            .route(
                "/personnes/{id}",
                get(get_personne).post(create_personne).delete(delete_personne),
            )
            .route("/country/{id}", get(get_country))
            .route_layer(middleware::from_fn(track_metrics))
            .with_state(state)
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id_of(request),
                )
            }))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown_rx` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            legacy_endpoint = %self.config.legacy.endpoint_url,
            strict_mode = self.config.api.strict_mode,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The router, for serving in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn store(&self) -> &PersonStore {
        &self.store
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}
