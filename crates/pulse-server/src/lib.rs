#![forbid(unsafe_code)]

//! HTTP layer wrapping the sentiment classifier: health, resource metrics,
//! and predict, with per-response timing instrumentation.

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use pulse_core::Classifier;
use std::sync::Arc;

mod http;
mod middleware;
mod resources;

pub use resources::{FixedSampler, ResourceSampler, ResourceSnapshot, SampleError, SystemSampler};

pub const CRATE_NAME: &str = "pulse-server";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_string(),
            max_body_bytes: 16 * 1024 * 1024,
        }
    }
}

/// Shared request state. The service is otherwise stateless: nothing here is
/// mutated across requests.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Classifier,
    pub sampler: Arc<dyn ResourceSampler>,
    pub config: ServerConfig,
}

impl AppState {
    #[must_use]
    pub fn new(classifier: Classifier, sampler: Arc<dyn ResourceSampler>) -> Self {
        Self::with_config(classifier, sampler, ServerConfig::default())
    }

    #[must_use]
    pub fn with_config(
        classifier: Classifier,
        sampler: Arc<dyn ResourceSampler>,
        config: ServerConfig,
    ) -> Self {
        Self {
            classifier,
            sampler,
            config,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(http::handlers::health_handler))
        .route("/metrics", get(http::handlers::metrics_handler))
        .route("/predict", post(http::handlers::predict_handler))
        .layer(from_fn(middleware::timing::response_timing_middleware))
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .with_state(state)
}
