//! Stompilot marketing site server.
//!
//! Renders the Leptos `client` app on the server and serves its hydration
//! bundle plus static downloads.

mod config;
mod routes;

use std::process::ExitCode;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, SiteConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: std::net::SocketAddr, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stompilot_site=info,info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "stompilot-site exited");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let site_root = std::path::PathBuf::from(&*leptos_options.site_root);
    let config = SiteConfig::from_env(leptos_options.site_addr, &site_root)?;

    let app = routes::app(leptos_options, &config.public_dir);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| StartupError::Bind { addr: config.addr, source })?;

    tracing::info!(addr = %config.addr, public_dir = %config.public_dir.display(), "stompilot-site listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
