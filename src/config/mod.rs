use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connection_timeout_seconds: u64,
    pub idle_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub external_url: Option<String>,
    pub api_rate_limit: u64,
    pub max_request_body_size: usize,
}

/// Read an environment variable, falling back to `default`, and parse it
fn env_or<T: std::str::FromStr>(name: &str, default: &str) -> Result<T> {
    std::env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| Error::Config(format!("Invalid {name} value")))
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:./data/recipes.db".to_string());

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env_or("PORT", "8080")?;
        let external_url = std::env::var("EXTERNAL_URL").ok();
        let api_rate_limit = env_or("API_RATE_LIMIT", "100")?;
        let max_request_body_size = env_or("MAX_REQUEST_BODY_SIZE", "1048576")?;

        let max_connections = env_or("DATABASE_MAX_CONNECTIONS", "10")?;
        let min_connections = env_or("DATABASE_MIN_CONNECTIONS", "1")?;
        let connection_timeout_seconds = env_or("DATABASE_CONNECTION_TIMEOUT", "30")?;
        let idle_timeout_seconds = env_or("DATABASE_IDLE_TIMEOUT", "600")?;

        Ok(Settings {
            database: DatabaseConfig {
                url: database_url,
                max_connections,
                min_connections,
                connection_timeout_seconds,
                idle_timeout_seconds,
            },
            server: ServerConfig {
                host,
                port,
                external_url,
                api_rate_limit,
                max_request_body_size,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.server.api_rate_limit == 0 {
            return Err(Error::Config("API rate limit must be non-zero".to_string()));
        }

        if self.database.max_connections == 0 {
            return Err(Error::Config(
                "Database max connections must be non-zero".to_string(),
            ));
        }

        if self.database.min_connections > self.database.max_connections {
            return Err(Error::Config(
                "Database min connections cannot exceed max connections".to_string(),
            ));
        }

        Ok(())
    }

    /// Base URL the CLI client uses to reach a running server
    pub fn server_url(&self) -> String {
        self.server
            .external_url
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}", self.server.host, self.server.port))
    }
}
