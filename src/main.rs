//! `schooladmin` host: serves the server-rendered admin UI and its WASM
//! bundle. All data comes from the school API, called from the browser.

mod config;
mod routes;

use std::process::ExitCode;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{ConfigError, HostConfig};

async fn serve() -> Result<(), Box<dyn std::error::Error>> {
    let config = HostConfig::from_env()?;
    match client::config::api_config() {
        Ok(baked) if config.matches_client(&baked) => {}
        Ok(baked) => tracing::warn!(
            host = config.api.base_url(),
            bundle = baked.base_url(),
            "client bundle was built against a different API; rebuild with SCHOOL_API_BASE_URL set"
        ),
        Err(error) => tracing::warn!(%error, "client bundle has a malformed API base URL"),
    }

    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let app = routes::app(conf.leptos_options);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, api = config.api.base_url(), "schooladmin listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "schooladmin=info,tower_http=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match serve().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "server failed");
            ExitCode::FAILURE
        }
    }
}
