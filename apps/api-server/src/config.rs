//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use blog_infra::DatabaseConfig;

#[cfg(feature = "auth")]
use blog_infra::JwtConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server on the in-memory store.
    pub database: Option<DatabaseConfig>,
    #[cfg(feature = "auth")]
    pub jwt: JwtConfig,
    /// Upper bound on the time a single request may spend in a use case.
    pub request_timeout: Duration,
    /// Publish the `hello-world` demo post when running in memory.
    pub seed_demo_content: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS", 20),
            min_connections: parse_var("DB_MIN_CONNECTIONS", 2),
            sql_logging: flag_var("DB_SQL_LOGGING", false),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT", 8080),
            database,
            #[cfg(feature = "auth")]
            jwt: Self::jwt_from_env(),
            request_timeout: Duration::from_secs(parse_var("REQUEST_TIMEOUT_SECS", 10)),
            seed_demo_content: flag_var("SEED_DEMO_CONTENT", false),
        }
    }

    #[cfg(feature = "auth")]
    fn jwt_from_env() -> JwtConfig {
        let defaults = JwtConfig::default();
        let config = JwtConfig {
            secret: env::var("JWT_SECRET").unwrap_or(defaults.secret),
            expiration_hours: parse_var("JWT_EXPIRATION_HOURS", defaults.expiration_hours),
            issuer: env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
        };

        if config.uses_dev_secret() {
            let is_production = env::var("RUST_ENV")
                .map(|v| v == "production" || v == "prod")
                .unwrap_or(false);

            if is_production {
                tracing::error!(
                    "SECURITY: Using default JWT secret in production! Set JWT_SECRET environment variable."
                );
            } else {
                tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
            }
        }

        config
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn flag_var(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(default)
}
