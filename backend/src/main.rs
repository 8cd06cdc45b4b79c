//! Backend entry-point: loads settings, selects the store and serves the
//! `/kanbans` API.

mod server;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use kanban_backend::config::KanbanSettings;
use ortho_config::OrthoConfig;
use kanban_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, create_server};

async fn apply_migrations(database_url: &str) -> std::io::Result<()> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&url))
        .await
        .map_err(|err| std::io::Error::other(format!("migration task failed: {err}")))?
        .map_err(std::io::Error::other)?;
    info!(applied, "database migrations complete");
    Ok(())
}

async fn build_pool(settings: &KanbanSettings) -> std::io::Result<Option<DbPool>> {
    let Some(database_url) = settings.database_url() else {
        return Ok(None);
    };
    if settings.run_migrations {
        apply_migrations(database_url).await?;
    }
    let config = PoolConfig::new(database_url).with_max_size(settings.db_max_connections());
    let pool = DbPool::new(config).await.map_err(std::io::Error::other)?;
    Ok(Some(pool))
}

#[cfg(feature = "metrics")]
fn make_metrics() -> std::io::Result<actix_web_prom::PrometheusMetrics> {
    PrometheusMetricsBuilder::new("kanban")
        .endpoint("/metrics")
        .build()
        .map_err(|err| std::io::Error::other(format!("configure Prometheus metrics: {err}")))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = KanbanSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("load settings: {err}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    #[cfg(not(feature = "metrics"))]
    let config = ServerConfig::new(bind_addr);
    #[cfg(feature = "metrics")]
    let config = ServerConfig::new(bind_addr, make_metrics()?);

    let config = match build_pool(&settings).await? {
        Some(pool) => config.with_db_pool(pool),
        None => config,
    };

    info!(%bind_addr, "starting kanban backend");
    create_server(config)?.await
}
