//! Connection configuration resolved from the environment.
//!
//! # Environment variables
//!
//! | Variable                  | Required | Default        | Description                              |
//! |---------------------------|----------|----------------|------------------------------------------|
//! | `DATABASE_URL`            | no       | --             | Full URL; overrides every `PG*` variable |
//! | `PGHOST`                  | no       | `localhost`    | Server host                              |
//! | `PGPORT`                  | no       | `5432`         | Server port                              |
//! | `PGDATABASE`              | no       | `movie_rental` | Database name                            |
//! | `PGUSER`                  | no       | `postgres`     | Login role                               |
//! | `PGPASSWORD`              | no       | --             | Password for `PGUSER`                    |
//! | `DB_MAX_CONNECTIONS`      | no       | `5`            | Pool size                                |
//! | `DB_ACQUIRE_TIMEOUT_SECS` | no       | `10`           | Seconds to wait for a pooled connection  |

use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_DATABASE: &str = "movie_rental";
pub const DEFAULT_USER: &str = "postgres";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// Environment values that cannot be turned into connection settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but does not parse as the expected type.
    #[error("{var} must be {expected}, got '{value}'")]
    InvalidValue {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    /// `DATABASE_URL` could not be parsed.
    #[error("DATABASE_URL is not a valid PostgreSQL URL: {0}")]
    InvalidUrl(#[source] sqlx::Error),
}

/// Resolved settings for the store connection pool.
#[derive(Debug, Clone)]
pub struct DbConfig {
    options: PgConnectOptions,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DbConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve each variable. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let options = match get("DATABASE_URL") {
            Some(url) => PgConnectOptions::from_str(&url).map_err(ConfigError::InvalidUrl)?,
            None => {
                let port = match get("PGPORT") {
                    Some(raw) => parse_var("PGPORT", &raw, "a port number")?,
                    None => DEFAULT_PORT,
                };
                let mut options = PgConnectOptions::new()
                    .host(&get("PGHOST").unwrap_or_else(|| DEFAULT_HOST.into()))
                    .port(port)
                    .database(&get("PGDATABASE").unwrap_or_else(|| DEFAULT_DATABASE.into()))
                    .username(&get("PGUSER").unwrap_or_else(|| DEFAULT_USER.into()));
                if let Some(password) = get("PGPASSWORD") {
                    options = options.password(&password);
                }
                options
            }
        };

        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(raw) => {
                let n: u32 = parse_var("DB_MAX_CONNECTIONS", &raw, "a positive integer")?;
                if n == 0 {
                    return Err(ConfigError::InvalidValue {
                        var: "DB_MAX_CONNECTIONS",
                        expected: "a positive integer",
                        value: raw,
                    });
                }
                n
            }
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let acquire_timeout_secs = match get("DB_ACQUIRE_TIMEOUT_SECS") {
            Some(raw) => parse_var("DB_ACQUIRE_TIMEOUT_SECS", &raw, "a number of seconds")?,
            None => DEFAULT_ACQUIRE_TIMEOUT_SECS,
        };

        Ok(Self {
            options,
            max_connections,
            acquire_timeout_secs,
        })
    }

    /// Connect options for the pool. Carries credentials; do not log.
    pub fn connect_options(&self) -> PgConnectOptions {
        self.options.clone()
    }

    /// `host:port/database`, safe to log.
    pub fn target(&self) -> String {
        format!(
            "{}:{}/{}",
            self.options.get_host(),
            self.options.get_port(),
            self.options.get_database().unwrap_or("")
        )
    }
}

fn parse_var<T: FromStr>(
    var: &'static str,
    raw: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        expected,
        value: raw.to_string(),
    })
}
