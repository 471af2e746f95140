use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::Config;

/// Open the catalog's connection pool, sized by `DB_MAX_CONNECTIONS` / `DB_MIN_CONNECTIONS`.
///
/// Waiting for a free connection is capped by the query timeout, so a saturated pool
/// surfaces as an unavailable catalog instead of a hung request.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &Config) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(&config.database_url);
    opts.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(config.query_timeout)
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(false);

    let db = Database::connect(opts).await?;
    tracing::debug!(
        max_connections = config.db_max_connections,
        min_connections = config.db_min_connections,
        "database pool ready"
    );
    Ok(db)
}
