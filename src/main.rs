mod config;
mod routes;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::{ServerConfig, StartupError};

#[tokio::main]
async fn main() -> ExitCode {
    // Also installs the `log` bridge, so records from the client crate land here during SSR.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "authgate stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let leptos_options = routes::load_options()?;
    let config = ServerConfig::from_env(leptos_options.site_addr);

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| StartupError::Bind { addr: config.addr, source })?;

    tracing::info!(addr = %config.addr, "authgate listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
