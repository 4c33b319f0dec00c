use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use jobboard_common::model::Job;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::AppError;
use crate::source::JobSource;

/// Message shown to users when a refresh fails.
pub const REFRESH_FAILED_MESSAGE: &str = "Gagal memuat data lowongan";

struct StoreState {
    jobs: Vec<Job>,
    error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStatus {
    pub loading: bool,
    pub error: Option<String>,
    pub job_count: usize,
}

/// In-memory job postings plus the loading/error flags consumers render.
///
/// One instance is shared by reference with every consumer. `loading` is
/// derived from the number of refreshes in flight, so overlapping refreshes
/// keep it set until the last one finishes.
pub struct JobStore<S> {
    state: RwLock<StoreState>,
    in_flight: AtomicUsize,
    source: S,
}

/// Decrements the in-flight counter even if the refresh future is dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl<S: JobSource> JobStore<S> {
    pub fn new(jobs: Vec<Job>, source: S) -> Result<Self, AppError> {
        ensure_unique_ids(&jobs)?;
        Ok(Self {
            state: RwLock::new(StoreState { jobs, error: None }),
            in_flight: AtomicUsize::new(0),
            source,
        })
    }

    pub async fn list(&self) -> Vec<Job> {
        self.state.read().await.jobs.clone()
    }

    /// Jobs whose title, company or location contains `keyword`, ignoring case.
    /// An empty keyword returns every job.
    pub async fn search(&self, keyword: &str) -> Vec<Job> {
        let state = self.state.read().await;
        if keyword.is_empty() {
            return state.jobs.clone();
        }
        let needle = keyword.to_lowercase();
        state
            .jobs
            .iter()
            .filter(|job| job.matches_lowercase(&needle))
            .cloned()
            .collect()
    }

    pub async fn find_by_id(&self, id: u32) -> Option<Job> {
        let state = self.state.read().await;
        state.jobs.iter().find(|job| job.id == id).cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub async fn status(&self) -> StoreStatus {
        let state = self.state.read().await;
        StoreStatus {
            loading: self.is_loading(),
            error: state.error.clone(),
            job_count: state.jobs.len(),
        }
    }

    /// Pull a fresh batch from the source. Failures are recorded in the error
    /// flag and leave the current jobs in place. The error flag always reflects
    /// the refresh that finished last.
    pub async fn refresh(&self) {
        let _in_flight = InFlight::enter(&self.in_flight);
        self.state.write().await.error = None;

        let fetched = self
            .source
            .fetch()
            .await
            .and_then(|jobs| ensure_unique_ids(&jobs).map(|()| jobs));

        let mut state = self.state.write().await;
        match fetched {
            Ok(jobs) => {
                info!(source = self.source.name(), count = jobs.len(), "jobs refreshed");
                state.jobs = jobs;
                state.error = None;
            }
            Err(e) => {
                warn!(source = self.source.name(), error = %e, "jobs refresh failed");
                state.error = Some(REFRESH_FAILED_MESSAGE.to_string());
            }
        }
    }
}

fn ensure_unique_ids(jobs: &[Job]) -> Result<(), AppError> {
    let mut seen = HashSet::with_capacity(jobs.len());
    for job in jobs {
        if !seen.insert(job.id) {
            return Err(AppError::DuplicateJobId(job.id));
        }
    }
    Ok(())
}
