use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Employment type of a posting, serialized with the labels shown on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    #[serde(rename = "Magang")]
    Internship,
    #[serde(rename = "Kontrak")]
    Contract,
}

impl JobType {
    pub fn label(self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Internship => "Magang",
            JobType::Contract => "Kontrak",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    /// Free-text range, e.g. "Rp 5.000.000 - Rp 8.000.000".
    pub salary: String,
    pub description: String,
    pub requirements: Vec<String>,
    /// ISO date the posting went live (`YYYY-MM-DD`).
    pub posted_at: String,
    pub logo: String,
}

impl Job {
    /// Case-insensitive substring match against title, company and location.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        [&self.title, &self.company, &self.location]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
