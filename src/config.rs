/// Configuration management
///
/// Loads configuration from environment variables into a type-safe struct.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: PostgreSQL connection string (required)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 10)
///
/// # Example
///
/// ```no_run
/// use author_store::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Connecting to {}", config.database.url);
/// # Ok(())
/// # }
/// ```

use crate::db::pool::DatabaseConfig;
use std::env;

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Database configuration
    pub database: DatabaseConfig,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// A `.env` file in the working directory is read first if present
    /// (development convenience).
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or
    /// `DATABASE_MAX_CONNECTIONS` is not a number.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()?;

        Ok(Self {
            database: DatabaseConfig {
                url,
                max_connections,
                ..Default::default()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_carries_database_settings() {
        let config = Config {
            database: DatabaseConfig {
                url: "postgresql://localhost/authors".to_string(),
                max_connections: 5,
                ..Default::default()
            },
        };

        assert_eq!(config.database.url, "postgresql://localhost/authors");
        assert_eq!(config.database.max_connections, 5);
    }
}
