use dnslite_domain::config::DatabaseConfig;
use dnslite_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!(path = %cfg.path, "Initializing database");

    let pool = create_pool(cfg).await.map_err(|e| {
        error!("Failed to initialize database pool: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        max_connections = cfg.max_connections,
        "Database initialized successfully"
    );

    Ok(pool)
}
