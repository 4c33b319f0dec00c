use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::Job;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchJobsParams {
    /// Keyword matched against title, company and location (case-insensitive).
    /// An empty query returns every job.
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetJobParams {
    /// Numeric job ID such as 1 or 42.
    pub job_id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct JobListResponse {
    pub total: usize,
    pub jobs: Vec<Job>,
}

impl From<Vec<Job>> for JobListResponse {
    fn from(jobs: Vec<Job>) -> Self {
        Self {
            total: jobs.len(),
            jobs,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct JobDetailResponse {
    pub job: Job,
    /// Board path of this posting, e.g. "/jobs/2".
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct JobBoardStatusResponse {
    pub loading: bool,
    /// User-visible message of the last failed refresh, if any.
    pub error: Option<String>,
    pub job_count: usize,
}
