use dnslite_domain::config::DatabaseConfig;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const MEMORY_PATH: &str = ":memory:";

pub fn database_url(path: &str) -> String {
    if path == MEMORY_PATH {
        "sqlite::memory:".to_string()
    } else {
        format!("sqlite:{}", path)
    }
}

pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let in_memory = config.path == MEMORY_PATH;
    let mut options = SqliteConnectOptions::from_str(&database_url(&config.path))?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(config.busy_timeout_secs));
    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    // Every connection to :memory: opens a separate database.
    let max_connections = if in_memory { 1 } else { config.max_connections.max(1) };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
