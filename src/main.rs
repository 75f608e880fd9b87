//! Cinerank HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use cinerank::audit::TracingAuditSink;
use cinerank::auth::{SessionSecrets, TokenAuthenticator};
use cinerank::config::Config;
use cinerank::gateway::{HandlerState, create_router_with_state};
use cinerank::model::{LinearModel, RecommendationModel};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        session_expiration_hours = config.session_expiration_hours,
        "Cinerank starting"
    );

    let model = match &config.model_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading model");
            LinearModel::load(path)?
        }
        None => {
            tracing::warn!("No CINERANK_MODEL_PATH configured, running the built-in stub model");
            LinearModel::stub()
        }
    };
    tracing::info!(candidates = model.candidates().len(), "Model ready");

    let secrets = Arc::new(SessionSecrets::derive(&config)?);
    let authenticator = Arc::new(TokenAuthenticator::new(
        &secrets,
        config.session_expiration_hours,
    ));

    let state = HandlerState::new(secrets, authenticator, model, Arc::new(TracingAuditSink));
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Cinerank shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
