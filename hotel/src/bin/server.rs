//! Hotel backend HTTP server.
//!
//! Loads configuration, connects `PostgreSQL` and Redis, and serves the API
//! until Ctrl+C or SIGTERM.

use anyhow::Context;
use hotel::config::Config;
use hotel::server::{AppState, build_router, shutdown_signal};
use hotel_auth::stores::RedisTokenCache;
use hotel_auth::{PasswordHasher, TokenIssuer};
use hotel_postgres::PgHotelStore;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hotel=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting hotel backend");

    let config = Config::from_env()?;
    info!(
        host = %config.server.host,
        port = config.server.port,
        "Configuration loaded"
    );

    let metrics_addr: SocketAddr = format!("{}:{}", config.server.host, config.server.metrics_port)
        .parse()
        .context("invalid metrics listen address")?;
    PrometheusBuilder::new()
        .with_http_listener(metrics_addr)
        .install()
        .context("failed to install Prometheus exporter")?;
    hotel::metrics::register_business_metrics();
    info!(address = %metrics_addr, "Metrics exporter listening");

    info!("Connecting to PostgreSQL");
    let store = PgHotelStore::connect(&config.postgres.url, config.postgres.max_connections)
        .await
        .context("failed to connect to PostgreSQL")?;
    store.migrate().await.context("failed to run migrations")?;
    info!("Database ready");

    info!("Connecting to Redis");
    let cache = RedisTokenCache::new(&config.redis.url)
        .await
        .context("failed to connect to Redis")?;

    let tokens = TokenIssuer::new(config.auth.jwt_secret.as_bytes(), config.auth.token_ttl());
    let state = AppState::new(store, cache, tokens, PasswordHasher::default());
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
