use anyhow::Context;
use trivia_api::{config::ApiConfig, state::ApiState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env().context("invalid configuration")?;

    trivia_api::tracing::init_tracing(&config.env);

    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    trivia_db::ensure_database(database_url).await?;
    let pool = trivia_db::create_pool(database_url, config.db_max_connections).await?;
    trivia_db::run_migrations(&pool).await?;

    let metrics_handle = trivia_api::metrics::init_metrics()?;

    let state = ApiState::new(pool, config.env.clone());
    let app = trivia_api::router::app(state, &config, Some(metrics_handle));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    tracing::info!("Server running on http://{address} ({:?})", config.env);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Shutting down");
}
