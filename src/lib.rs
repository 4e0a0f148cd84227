pub mod api;
pub mod config;
pub mod error;
pub mod prompt;
pub mod upstream;

use std::sync::Arc;

use axum::Router;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub use config::AppConfig;
pub use error::{EnhanceError, ErrorKind};
pub use prompt::{compose, ComposedPayload, Persona};
pub use upstream::{UpstreamClient, UpstreamReply};

/// Shared by every request. Nothing in here is mutated after start-up.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let upstream = UpstreamClient::from_config(&config);
        Self {
            config: Arc::new(config),
            upstream,
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(app: Router, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
