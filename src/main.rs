use std::net::TcpListener;
use std::sync::Arc;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use matchday_api::run;
use matchday_api::config::settings::get_config;
use matchday_api::db::{FootballStore, PgFootballStore};
use matchday_api::metrics::HttpMetrics;
use matchday_api::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = match get_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to read the config: {}", e);
            std::process::exit(1);
        }
    };

    let subscriber = get_subscriber(
        "matchday-api".into(),
        config.application.log_level.clone(),
        std::io::stdout
    );
    init_subscriber(subscriber);

    // Connect eagerly so a bad connection string or an unreachable store stops startup
    let connection_pool = match PgPoolOptions::new()
        .max_connections(32)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect(config.database.connection_string().expose_secret())
        .await
    {
        Ok(pool) => {
            tracing::info!("✅ Connected to Postgres at {}:{}", config.database.host, config.database.port);
            pool
        }
        Err(e) => {
            tracing::error!("❌ Failed to connect to Postgres: {}", e);
            std::process::exit(1);
        }
    };

    let metrics = match HttpMetrics::new() {
        Ok(metrics) => metrics,
        Err(e) => {
            tracing::error!("❌ Failed to register request metrics: {}", e);
            std::process::exit(1);
        }
    };

    let store: Arc<dyn FootballStore> = Arc::new(PgFootballStore::new(connection_pool));

    let address = config.application.address();
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Server is running on {}", address);

    run(listener, store, metrics)?.await
}
