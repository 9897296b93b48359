use std::time::Duration;

use anyhow::{ensure, Context, Result};

const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare `cargo run` serves the seed board.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Empty by default: the hosted client never ships a key.
    pub gemini_api_key: String,
    pub gemini_api_url: String,
    pub notification_ttl: Duration,
    pub enhance_timeout: Duration,
    /// Sessions untouched for this long are closed by the sweeper.
    pub session_idle: Duration,
    pub session_sweep_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let notification_ttl_ms = lookup("NOTIFICATION_TTL_MS")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u64>()
            .context("NOTIFICATION_TTL_MS must be a whole number of milliseconds")?;

        let enhance_timeout_secs = lookup("ENHANCE_TIMEOUT_SECS")
            .unwrap_or_else(|| "60".to_string())
            .parse::<u64>()
            .context("ENHANCE_TIMEOUT_SECS must be a whole number of seconds")?;

        let session_idle_secs = lookup("SESSION_IDLE_SECS")
            .unwrap_or_else(|| "1800".to_string())
            .parse::<u64>()
            .context("SESSION_IDLE_SECS must be a whole number of seconds")?;
        ensure!(session_idle_secs > 0, "SESSION_IDLE_SECS must be at least 1");

        let session_sweep_secs = lookup("SESSION_SWEEP_SECS")
            .unwrap_or_else(|| "60".to_string())
            .parse::<u64>()
            .context("SESSION_SWEEP_SECS must be a whole number of seconds")?;
        ensure!(session_sweep_secs > 0, "SESSION_SWEEP_SECS must be at least 1");

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            gemini_api_key: lookup("GEMINI_API_KEY").unwrap_or_default(),
            gemini_api_url: lookup("GEMINI_API_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
            notification_ttl: Duration::from_millis(notification_ttl_ms),
            enhance_timeout: Duration::from_secs(enhance_timeout_secs),
            session_idle: Duration::from_secs(session_idle_secs),
            session_sweep_interval: Duration::from_secs(session_sweep_secs),
        })
    }
}
