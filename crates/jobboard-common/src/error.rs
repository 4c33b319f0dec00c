use reqwest::StatusCode;

/// Error types shared across the job board crates.
///
/// These errors represent failures talking to the upstream jobs API. Application-specific
/// errors should be defined in each binary crate and wrap `CommonError` via `#[from]`.
#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("{0}")]
    Config(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid response JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("upstream returned error: status={status} body={body}")]
    Upstream { status: StatusCode, body: String },
}
