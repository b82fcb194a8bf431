//! Image Gallery Web Client Entry Point
//!
//! Relying-party server: logout with token revocation, the order-frame
//! userinfo lookup and image API pages.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use axum::Router;
use gallery::{GalleryConfig, gallery_router};
use platform::client::{HttpClientConfig, build_http_client};
use platform::secret::ClientSecret;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:44356";

/// Build the relying-party configuration from the environment
fn load_config() -> anyhow::Result<GalleryConfig> {
    let mut config = if cfg!(debug_assertions) {
        GalleryConfig::development()
    } else {
        GalleryConfig::default()
    };

    if let Ok(authority) = env::var("GALLERY_AUTHORITY") {
        config.authority = authority;
    }
    if let Ok(client_id) = env::var("GALLERY_CLIENT_ID") {
        config.client_id = client_id;
    }
    if let Ok(api_base_url) = env::var("GALLERY_API_BASE_URL") {
        config.api_base_url = api_base_url;
    }

    let secret = env::var("GALLERY_CLIENT_SECRET")
        .context("GALLERY_CLIENT_SECRET must be set in environment")?;
    config.client_secret = ClientSecret::new(secret);
    anyhow::ensure!(
        !config.client_secret.is_empty(),
        "GALLERY_CLIENT_SECRET must not be empty"
    );

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web=info,gallery=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config()?;
    tracing::info!(
        authority = %config.authority,
        client_id = %config.client_id,
        "Loaded relying-party configuration"
    );

    let client = build_http_client(&HttpClientConfig::default())?;

    // Build router
    let app = Router::new()
        .merge(gallery_router(config, client)?)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = env::var("WEB_BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .context("WEB_BIND_ADDR must be a socket address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
