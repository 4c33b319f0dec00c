use std::future::Future;
use std::time::Duration;

use jobboard_common::api_client::ApiClient;
use jobboard_common::model::Job;
use tracing::debug;

use crate::error::AppError;
use crate::seed::seed_jobs;

/// Upstream path serving the full list of postings.
pub const JOBS_API_PATH: &str = "/api/jobs";

/// Where the store pulls a fresh batch of postings from on refresh.
pub trait JobSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Job>, AppError>> + Send;

    fn name(&self) -> &'static str;
}

/// Returns the seed postings after a simulated network delay.
pub struct SeededSource {
    delay: Duration,
}

impl SeededSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl JobSource for SeededSource {
    async fn fetch(&self) -> Result<Vec<Job>, AppError> {
        debug!(delay_ms = self.delay.as_millis(), "simulating jobs fetch");
        tokio::time::sleep(self.delay).await;
        Ok(seed_jobs())
    }

    fn name(&self) -> &'static str {
        "seeded"
    }
}

/// Fetches postings from the upstream jobs API.
pub struct HttpSource {
    client: ApiClient,
}

impl HttpSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl JobSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Job>, AppError> {
        let jobs: Vec<Job> = self.client.get_json(JOBS_API_PATH).await?;
        debug!(count = jobs.len(), "fetched jobs from upstream");
        Ok(jobs)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

pub enum Source {
    Seeded(SeededSource),
    Http(HttpSource),
}

impl JobSource for Source {
    async fn fetch(&self) -> Result<Vec<Job>, AppError> {
        match self {
            Source::Seeded(source) => source.fetch().await,
            Source::Http(source) => source.fetch().await,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Source::Seeded(source) => source.name(),
            Source::Http(source) => source.name(),
        }
    }
}
