use std::time::{Duration, SystemTime, UNIX_EPOCH};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::CommonError;

#[derive(Clone, Debug)]
pub struct ApiClientConfig {
    pub base_url: String,
    pub default_timeout: Duration,
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    pub max_error_body_bytes: usize,
}

impl ApiClientConfig {
    /// Returns `Ok(None)` when `JOBS_API_BASE_URL` is unset or blank.
    ///
    /// Optional:
    /// - `JOBS_API_TIMEOUT_SECS` (default: 30)
    /// - `JOBS_API_MAX_RETRIES` (default: 3)
    /// - `JOBS_API_RETRY_INITIAL_MS` (default: 200)
    /// - `JOBS_API_RETRY_MAX_MS` (default: 5000)
    /// - `JOBS_API_MAX_ERROR_BODY_BYTES` (default: 8192)
    ///
    /// Set but unparseable values are rejected rather than defaulted.
    pub fn from_env() -> Result<Option<Self>, CommonError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<Self>, CommonError> {
        let Some(base_url) = lookup("JOBS_API_BASE_URL").filter(|s| !s.trim().is_empty()) else {
            return Ok(None);
        };

        let default_timeout =
            Duration::from_secs(parse_var(&lookup, "JOBS_API_TIMEOUT_SECS")?.unwrap_or(30));
        let max_retries = parse_var(&lookup, "JOBS_API_MAX_RETRIES")?.unwrap_or(3);
        let initial_backoff =
            Duration::from_millis(parse_var(&lookup, "JOBS_API_RETRY_INITIAL_MS")?.unwrap_or(200));
        let max_backoff =
            Duration::from_millis(parse_var(&lookup, "JOBS_API_RETRY_MAX_MS")?.unwrap_or(5_000));
        let max_error_body_bytes =
            parse_var(&lookup, "JOBS_API_MAX_ERROR_BODY_BYTES")?.unwrap_or(8 * 1024);

        Ok(Some(Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            default_timeout,
            max_retries,
            initial_backoff,
            max_backoff,
            max_error_body_bytes,
        }))
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, CommonError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|_| {
            CommonError::Config(format!(
                "{key} must be a non-negative whole number, got '{raw}'"
            ))
        })
}

/// JSON-over-HTTP client for the upstream jobs API.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiClientConfig,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ApiClientConfig) -> Result<Self, CommonError> {
        let http = reqwest::Client::builder()
            .user_agent("job-board/jobboard-common")
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// GET `{base_url}{path}` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CommonError> {
        let url = format!("{}{}", self.config.base_url, path);
        self.request_with_retry(|| async {
            debug!(url = %url, "GET upstream");
            let resp = self
                .http
                .get(&url)
                .timeout(self.config.default_timeout)
                .send()
                .await?;
            Self::parse_json_response(resp, self.config.max_error_body_bytes).await
        })
        .await
    }

    async fn parse_json_response<T: DeserializeOwned>(
        resp: reqwest::Response,
        max_error_body_bytes: usize,
    ) -> Result<T, CommonError> {
        let status = resp.status();
        if status.is_success() {
            let bytes = resp.bytes().await?;
            return Ok(serde_json::from_slice(&bytes)?);
        }
        let body = read_limited_text(resp, max_error_body_bytes).await;
        Err(CommonError::Upstream { status, body })
    }

    async fn request_with_retry<T, Fut, F>(&self, mut f: F) -> Result<T, CommonError>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, CommonError>>,
    {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            match f().await {
                Ok(v) => return Ok(v),
                Err(e) => {
                    if attempt > self.config.max_retries || !should_retry(&e) {
                        return Err(e);
                    }
                    let delay = backoff_delay(
                        self.config.initial_backoff,
                        self.config.max_backoff,
                        attempt - 1,
                    );
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis(),
                        error = %e,
                        "jobs API request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

fn should_retry(err: &CommonError) -> bool {
    match err {
        CommonError::Request(e) => e.is_timeout() || e.is_connect() || e.is_request() || e.is_body(),
        CommonError::Upstream { status, .. } => {
            *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
        }
        CommonError::InvalidJson(_) | CommonError::Config(_) => false,
    }
}

fn backoff_delay(initial: Duration, max: Duration, exponent: u32) -> Duration {
    let mult = 1u128.checked_shl(exponent).unwrap_or(u128::MAX);
    let base_ms = initial.as_millis().saturating_mul(mult);
    let capped_ms = std::cmp::min(base_ms, max.as_millis()) as u64;
    let jitter_cap = std::cmp::max(1, capped_ms / 4);
    let jitter_ms = pseudo_jitter_ms(jitter_cap);
    Duration::from_millis(capped_ms.saturating_add(jitter_ms))
}

fn pseudo_jitter_ms(max_inclusive: u64) -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| Duration::from_secs(0));
    let nanos = now.subsec_nanos() as u64;
    nanos % (max_inclusive + 1)
}

async fn read_limited_text(resp: reqwest::Response, max_bytes: usize) -> String {
    match resp.bytes().await {
        Ok(mut b) => {
            if b.len() > max_bytes {
                b.truncate(max_bytes);
            }
            String::from_utf8_lossy(&b).to_string()
        }
        Err(e) => {
            warn!(error = %e, "failed to read upstream error body");
            "<failed to read error body>".to_string()
        }
    }
}
