#![forbid(unsafe_code)]

use pulse_core::Classifier;
use pulse_server::{build_router, AppState, ServerConfig, SystemSampler};
use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn config_from_env() -> ServerConfig {
    let defaults = ServerConfig::default();
    ServerConfig {
        bind_addr: env_str("PULSE_BIND_ADDR", &defaults.bind_addr),
        max_body_bytes: env_usize("PULSE_MAX_BODY_BYTES", defaults.max_body_bytes),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "server exited");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), String> {
    let config = config_from_env();
    let sampler = Arc::new(SystemSampler::new().map_err(|e| e.to_string())?);
    let state = AppState::with_config(Classifier::with_default_scorer(), sampler, config.clone());
    let app = build_router(state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| format!("bind {}: {e}", config.bind_addr))?;
    info!(
        addr = %config.bind_addr,
        engine = pulse_core::ENGINE,
        "prediction service listening"
    );
    axum::serve(listener, app).await.map_err(|e| e.to_string())
}
