//! Identity Provider Entry Point
//!
//! Serves the profile endpoints backed by the PostgreSQL user store.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use axum::Router;
use identity::{PgUserRepository, ProfileConfig, profile_router};
use platform::secret::ClientSecret;
use sqlx::postgres::PgPoolOptions;
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

// Loopback unless IDP_BIND_ADDR says otherwise
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:44373";

fn load_config() -> anyhow::Result<ProfileConfig> {
    let mut config = if cfg!(debug_assertions) {
        ProfileConfig::development()
    } else {
        ProfileConfig::default()
    };

    if let Ok(client_id) = env::var("IDP_CLIENT_ID") {
        config.relying_party.client_id = client_id;
    }

    let secret =
        env::var("IDP_CLIENT_SECRET").context("IDP_CLIENT_SECRET must be set in environment")?;
    config.relying_party.client_secret = ClientSecret::new(secret);
    anyhow::ensure!(
        !config.relying_party.client_secret.is_empty(),
        "IDP_CLIENT_SECRET must not be empty"
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
                .unwrap_or_else(|_| "idp=info,identity=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    let repo = PgUserRepository::new(pool);
    repo.ping().await?;
    tracing::info!("Connected to user store");

    let config = load_config()?;
    tracing::info!(client_id = %config.relying_party.client_id, "Profile access restricted to relying party");

    // Build router
    let app = Router::new()
        .merge(profile_router(repo, config))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = env::var("IDP_BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .context("IDP_BIND_ADDR must be a socket address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
