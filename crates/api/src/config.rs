use std::path::PathBuf;

use sqlx::postgres::PgConnectOptions;

/// Server configuration loaded from environment variables.
///
/// Everything except the admin secret has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Largest accepted request body (default: 10 MiB, room for markdown uploads).
    pub max_body_bytes: usize,
    /// Built frontend assets to serve for non-API paths, if any.
    pub static_dir: Option<PathBuf>,
    /// Shared secret that unlocks the admin endpoints.
    pub admin_api_key: String,
}

const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MAX_BODY_BYTES`       | `10485760`                 |
    /// | `STATIC_DIR`           | unset (API only)           |
    /// | `ADMIN_API_KEY`        | **required**               |
    ///
    /// `ALLOWED_ORIGINS` and `ADMIN_PASSWORD` are read when the primary
    /// names are unset.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &env_with_alias("CORS_ORIGINS", "ALLOWED_ORIGINS")
                .unwrap_or_else(|| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_body_bytes: usize = std::env::var("MAX_BODY_BYTES")
            .ok()
            .map(|v| v.parse().expect("MAX_BODY_BYTES must be a valid usize"))
            .unwrap_or(DEFAULT_MAX_BODY_BYTES);

        let static_dir = std::env::var("STATIC_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let admin_api_key = env_with_alias("ADMIN_API_KEY", "ADMIN_PASSWORD")
            .filter(|v| !v.is_empty())
            .expect("ADMIN_API_KEY (or ADMIN_PASSWORD) must be set");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_body_bytes,
            static_dir,
            admin_api_key,
        }
    }
}

/// Database connection settings.
///
/// `DATABASE_URL` wins when set; otherwise the discrete `DB_*` variables
/// are combined.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub name: String,
    /// Pool size (default: `10`).
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// | Env Var              | Default     |
    /// |----------------------|-------------|
    /// | `DATABASE_URL`       | unset       |
    /// | `DB_HOST`            | `localhost` |
    /// | `DB_PORT`            | `5432`      |
    /// | `DB_USER`            | `postgres`  |
    /// | `DB_PASSWORD`        | unset       |
    /// | `DB_NAME`            | `folio`     |
    /// | `DB_MAX_CONNECTIONS` | `10`        |
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
            host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".into()),
            port: std::env::var("DB_PORT")
                .unwrap_or_else(|_| "5432".into())
                .parse()
                .expect("DB_PORT must be a valid u16"),
            user: std::env::var("DB_USER").unwrap_or_else(|_| "postgres".into()),
            password: std::env::var("DB_PASSWORD").ok(),
            name: std::env::var("DB_NAME").unwrap_or_else(|_| "folio".into()),
            max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".into())
                .parse()
                .expect("DB_MAX_CONNECTIONS must be a valid u32"),
        }
    }

    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return url.parse();
        }
        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        Ok(options)
    }
}

fn env_with_alias(primary: &str, alias: &str) -> Option<String> {
    std::env::var(primary)
        .or_else(|_| std::env::var(alias))
        .ok()
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test", "http://b.test"]
        );
    }

    #[test]
    fn discrete_settings_build_connect_options() {
        let config = DatabaseConfig {
            url: None,
            host: "db.internal".into(),
            port: 6543,
            user: "folio".into(),
            password: Some("secret".into()),
            name: "folio_test".into(),
            max_connections: 5,
        };
        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "folio");
        assert_eq!(options.get_database(), Some("folio_test"));
    }

    #[test]
    fn url_takes_precedence() {
        let config = DatabaseConfig {
            url: Some("postgres://u:p@example.test:5439/blog".into()),
            host: "ignored".into(),
            port: 1,
            user: "ignored".into(),
            password: None,
            name: "ignored".into(),
            max_connections: 5,
        };
        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "example.test");
        assert_eq!(options.get_port(), 5439);
        assert_eq!(options.get_database(), Some("blog"));
    }
}
