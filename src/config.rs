use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 60 * 24;
/// One year.
pub const MAX_SESSION_TTL_MINUTES: i64 = 60 * 24 * 365;

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    pub ttl_minutes: i64,
    pub cookie_secure: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars("DATABASE_URI", "MY_SECRET_KEY")
    }

    /// Same as [`AppConfig::from_env`] but reads the database and secret from
    /// `TEST_DB_URI` / `TEST_SECRET_KEY`.
    #[cfg(test)]
    pub fn from_test_env() -> anyhow::Result<Self> {
        Self::from_vars("TEST_DB_URI", "TEST_SECRET_KEY")
    }

    fn from_vars(db_var: &str, secret_var: &str) -> anyhow::Result<Self> {
        let database_url = std::env::var(db_var).with_context(|| format!("{db_var} is not set"))?;
        let ttl_minutes = std::env::var("SESSION_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_SESSION_TTL_MINUTES);
        if ttl_minutes > MAX_SESSION_TTL_MINUTES {
            anyhow::bail!(
                "SESSION_TTL_MINUTES must be at most {MAX_SESSION_TTL_MINUTES}, got {ttl_minutes}"
            );
        }
        let session = SessionConfig {
            secret: std::env::var(secret_var)
                .with_context(|| format!("{secret_var} is not set"))?,
            ttl_minutes,
            cookie_secure: std::env::var("SESSION_COOKIE_SECURE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        };
        Ok(Self {
            database_url,
            session,
        })
    }
}
