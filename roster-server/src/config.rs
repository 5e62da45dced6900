//! Server configuration
//!
//! | Variable | Default | Notes |
//! |----------|---------|-------|
//! | DATABASE_URL | (required) | PostgreSQL connection URL |
//! | PORT | 5000 | HTTP listen port |
//! | CORS_ORIGIN | http://localhost:5173 | The one origin allowed to call the API |
//! | DB_MAX_CONNECTIONS | 5 | Pool size |
//! | ENVIRONMENT | development | development, staging or production |

use crate::BoxError;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP port
    pub port: u16,
    /// Allowed cross-origin caller (the form's origin)
    pub cors_origin: String,
    /// Connection pool size
    pub db_max_connections: u32,
    /// Environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BoxError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.is_empty())
            .ok_or("DATABASE_URL must be set")?;

        let port = match lookup("PORT") {
            Some(p) => p
                .parse::<u16>()
                .map_err(|e| format!("PORT is not a valid port ({p}): {e}"))?,
            None => 5000,
        };

        Ok(Self {
            database_url,
            port,
            cors_origin: lookup("CORS_ORIGIN")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "http://localhost:5173".into()),
            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|n| n.parse().ok())
                .unwrap_or(5),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[(
            "DATABASE_URL",
            "postgres://localhost/roster",
        )]))
        .unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.cors_origin, "http://localhost:5173");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/roster"),
            ("PORT", "8088"),
            ("CORS_ORIGIN", "https://hr.example.com"),
            ("ENVIRONMENT", "production"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8088);
        assert_eq!(config.cors_origin, "https://hr.example.com");
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_database_url_required() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/roster"),
            ("PORT", "http"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
