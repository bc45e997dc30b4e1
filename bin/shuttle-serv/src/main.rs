use trivia_api::{config::ApiConfig, state::ApiState};

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: sqlx::PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    // Load configuration from Shuttle secrets
    let config = ApiConfig::from_shuttle_secrets(&secrets)
        .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    // Shuttle installs its own tracing subscriber, so init_tracing is skipped here

    let metrics_handle = trivia_api::metrics::init_metrics()?;
    tracing::info!("Prometheus metrics exporter initialized");

    // Run migrations on the Shuttle-provided pool
    trivia_db::run_migrations(&pool).await?;

    let state = ApiState::new(pool, config.env.clone());
    let app = trivia_api::router::app(state, &config, Some(metrics_handle));

    tracing::info!("Environment: {:?}", config.env);

    Ok(app.into())
}
