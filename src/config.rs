use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Upper bound on a single catalog query unless `QUERY_TIMEOUT_SECS` says otherwise.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(10);
/// Pool ceiling unless `DB_MAX_CONNECTIONS` says otherwise.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;
/// Idle connections kept open unless `DB_MIN_CONNECTIONS` says otherwise.
pub const DEFAULT_MIN_CONNECTIONS: u32 = 2;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: IpAddr,
    pub server_port: u16,
    pub environment: Environment,
    pub log_level: String,
    pub frontend_url: String,
    pub query_timeout: Duration,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
}

/// Deployment environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required: `DATABASE_URL`
    /// Optional with defaults: `SERVER_HOST`, `SERVER_PORT`, `ENVIRONMENT`, `LOG_LEVEL`,
    /// `FRONTEND_URL`, `QUERY_TIMEOUT_SECS`, `DB_MAX_CONNECTIONS`, `DB_MIN_CONNECTIONS`
    ///
    /// `PORT` overrides `SERVER_PORT`, and in production the host defaults to `0.0.0.0`.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is not set, if `SERVER_HOST` / `SERVER_PORT` /
    /// `QUERY_TIMEOUT_SECS` / `DB_*_CONNECTIONS` contain invalid values, or if the pool
    /// minimum exceeds its maximum.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let environment = Environment::parse(
            &std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        );

        let server_port = std::env::var("PORT")
            .or_else(|_| std::env::var("SERVER_PORT"))
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("SERVER_PORT / PORT must be a valid u16"))?;

        let default_host = if environment == Environment::Production {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        };

        let server_host = std::env::var("SERVER_HOST")
            .unwrap_or_else(|_| default_host.to_string())
            .parse::<IpAddr>()
            .map_err(|_| anyhow::anyhow!("SERVER_HOST must be a valid IP address"))?;

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());

        let query_timeout = parse_query_timeout(std::env::var("QUERY_TIMEOUT_SECS").ok())?;

        let (db_max_connections, db_min_connections) = parse_pool_size(
            std::env::var("DB_MAX_CONNECTIONS").ok(),
            std::env::var("DB_MIN_CONNECTIONS").ok(),
        )?;

        Ok(Self {
            database_url,
            server_host,
            server_port,
            environment,
            log_level,
            frontend_url,
            query_timeout,
            db_max_connections,
            db_min_connections,
        })
    }

    /// Build the socket address for the server to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }
}

impl Environment {
    fn parse(value: &str) -> Self {
        match value {
            "production" => Self::Production,
            "staging" => Self::Staging,
            _ => Self::Development,
        }
    }
}

fn parse_query_timeout(value: Option<String>) -> anyhow::Result<Duration> {
    let Some(raw) = value else {
        return Ok(DEFAULT_QUERY_TIMEOUT);
    };

    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(anyhow::anyhow!(
            "QUERY_TIMEOUT_SECS must be a positive number of seconds"
        )),
    }
}

/// `(max, min)` pool sizes; the maximum must be positive and at least the minimum.
fn parse_pool_size(max: Option<String>, min: Option<String>) -> anyhow::Result<(u32, u32)> {
    let max = match max {
        None => DEFAULT_MAX_CONNECTIONS,
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| anyhow::anyhow!("DB_MAX_CONNECTIONS must be a positive integer"))?,
    };

    let min = match min {
        None => DEFAULT_MIN_CONNECTIONS.min(max),
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| anyhow::anyhow!("DB_MIN_CONNECTIONS must be a non-negative integer"))?,
    };

    if min > max {
        anyhow::bail!("DB_MIN_CONNECTIONS ({min}) exceeds DB_MAX_CONNECTIONS ({max})");
    }

    Ok((max, min))
}
