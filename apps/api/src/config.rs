use std::time::Duration;

use anyhow::{Context, Result};

use crate::layout::FontFamily;

/// Application configuration loaded from environment variables.
/// Startup fails if `LEGAL_API_URL` is missing or a value does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote legal search API.
    pub legal_api_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Minimum time a retrieval takes before resolving. Zero disables it.
    pub min_latency: Duration,
    pub api_timeout: Duration,
    pub report_font: FontFamily,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let legal_api_url = lookup("LEGAL_API_URL")
            .filter(|v| !v.trim().is_empty())
            .context("Required environment variable 'LEGAL_API_URL' is not set")?;

        let report_font = match lookup("REPORT_FONT") {
            Some(value) => FontFamily::parse(&value).with_context(|| {
                format!("REPORT_FONT must be helvetica, times or courier, got '{value}'")
            })?,
            None => FontFamily::Helvetica,
        };

        Ok(Config {
            legal_api_url,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            min_latency: Duration::from_millis(
                lookup("MIN_LATENCY_MS")
                    .unwrap_or_else(|| "0".to_string())
                    .parse::<u64>()
                    .context("MIN_LATENCY_MS must be a number of milliseconds")?,
            ),
            api_timeout: Duration::from_secs(
                lookup("API_TIMEOUT_SECS")
                    .unwrap_or_else(|| "30".to_string())
                    .parse::<u64>()
                    .context("API_TIMEOUT_SECS must be a number of seconds")?,
            ),
            report_font,
        })
    }
}
