// ---------------------------------------------------------------------------
// config.rs — runtime configuration, read once from the environment
// ---------------------------------------------------------------------------

use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Everything the server and the seed binary need from the environment,
/// gathered in one place at startup. Unset variables fall back to the
/// documented defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub db_ssl: bool,
    /// Upper bound on pooled connections, fixed for the process lifetime.
    pub pool_max: u32,
    pub idle_timeout: Duration,
    /// How long a query waits for a pooled connection before failing.
    pub connect_timeout: Duration,
    pub port: u16,
    /// Allowed cross-origin frontend address (CORS, credentials included).
    pub frontend_url: String,
    /// Runtime mode. "development" exposes internal error messages to
    /// clients; every other value returns a generic message.
    pub env: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            db_host: env_or("DB_HOST", "localhost"),
            db_port: env_or("DB_PORT", "5432")
                .parse()
                .context("DB_PORT must be a port number")?,
            db_name: env_or("DB_NAME", "agent_directory"),
            db_user: env_or("DB_USER", "postgres"),
            db_password: env_or("DB_PASSWORD", ""),
            db_ssl: env_or("DB_SSL", "false") == "true",
            pool_max: env_or("DB_POOL_MAX", "20")
                .parse()
                .context("DB_POOL_MAX must be a number")?,
            idle_timeout: Duration::from_millis(
                env_or("DB_IDLE_TIMEOUT_MS", "30000")
                    .parse()
                    .context("DB_IDLE_TIMEOUT_MS must be milliseconds")?,
            ),
            connect_timeout: Duration::from_millis(
                env_or("DB_CONNECT_TIMEOUT_MS", "10000")
                    .parse()
                    .context("DB_CONNECT_TIMEOUT_MS must be milliseconds")?,
            ),
            port: env_or("PORT", "5000")
                .parse()
                .context("PORT must be a port number")?,
            frontend_url: env_or("FRONTEND_URL", "http://localhost:3000"),
            env: env_or("APP_ENV", "development"),
        })
    }

    pub fn is_development(&self) -> bool {
        self.env == "development"
    }

    /// Connection options for the configured Postgres instance.
    pub fn pg_connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .database(&self.db_name)
            .username(&self.db_user)
            .ssl_mode(if self.db_ssl {
                PgSslMode::Require
            } else {
                PgSslMode::Disable
            });

        if self.db_password.is_empty() {
            options
        } else {
            options.password(&self.db_password)
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

// ── Runtime mode for the error mapper ───────────────────────────────────────
// `ApiError::into_response` has no access to application state, so the mode
// chosen at startup is recorded process-wide.

static DEVELOPMENT_MODE: OnceLock<bool> = OnceLock::new();

/// Record the runtime mode once at startup. Later calls are ignored.
pub fn set_development_mode(development: bool) {
    let _ = DEVELOPMENT_MODE.set(development);
}

/// Whether internal error detail may be exposed to clients. Defaults to
/// `false` when never set (tests, or before startup completes).
pub fn development_mode() -> bool {
    DEVELOPMENT_MODE.get().copied().unwrap_or(false)
}
