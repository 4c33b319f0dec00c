use std::time::Duration;

use jobboard_common::api_client::ApiClientConfig;
use jobboard_common::error::CommonError;

use crate::error::AppError;

const DEFAULT_REFRESH_DELAY_MS: u64 = 500;

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Simulated latency of the seeded job source.
    pub refresh_delay: Duration,
    /// Upstream jobs API. `None` keeps the board on its seeded records.
    pub api: Option<ApiClientConfig>,
    /// Serve MCP over TCP on this address instead of stdio.
    pub tcp_listen_addr: Option<String>,
}

impl Config {
    /// Optional:
    /// - `JOBS_REFRESH_DELAY_MS` (default: 500)
    /// - `JOBS_API_BASE_URL` and friends (see [`ApiClientConfig::from_env`])
    /// - `MCP_TCP_LISTEN_ADDR`
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let refresh_delay = match lookup("JOBS_REFRESH_DELAY_MS") {
            Some(raw) => raw.trim().parse::<u64>().map(Duration::from_millis).map_err(|_| {
                AppError::Config(format!(
                    "JOBS_REFRESH_DELAY_MS must be a whole number of milliseconds, got '{raw}'"
                ))
            })?,
            None => Duration::from_millis(DEFAULT_REFRESH_DELAY_MS),
        };

        let api = ApiClientConfig::from_lookup(&lookup).map_err(|e| match e {
            CommonError::Config(message) => AppError::Config(message),
            other => AppError::Common(other),
        })?;

        let tcp_listen_addr = lookup("MCP_TCP_LISTEN_ADDR").filter(|s| !s.trim().is_empty());

        Ok(Self {
            refresh_delay,
            api,
            tcp_listen_addr,
        })
    }
}
