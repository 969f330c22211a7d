use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value stored in a listing field when the board page did not expose it.
pub const PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobSource {
    #[serde(rename = "LinkedIn")]
    LinkedIn,
    #[serde(rename = "Indeed")]
    Indeed,
    #[serde(rename = "APEC")]
    Apec,
}

impl JobSource {
    /// Order in which boards are scraped during a run.
    pub const ALL: [JobSource; 3] = [JobSource::LinkedIn, JobSource::Indeed, JobSource::Apec];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobSource::LinkedIn => "LinkedIn",
            JobSource::Indeed => "Indeed",
            JobSource::Apec => "APEC",
        }
    }
}

impl fmt::Display for JobSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One scraped job posting.
///
/// Field order matches the column order of the persisted CSV file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub link: String,
    pub source: JobSource,
    pub date_added: NaiveDate,
}

impl JobListing {
    pub fn key(&self) -> ListingKey {
        ListingKey {
            title: self.title.clone(),
            company: self.company.clone(),
            link: self.link.clone(),
        }
    }
}

/// Identity used to tell whether a listing was already present in an
/// earlier snapshot. Never used to drop listings from a run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingKey {
    pub title: String,
    pub company: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NotifyOutcome {
    /// Nothing to announce; no transport call was made.
    Skipped,
    Sent { count: usize },
    Failed { reason: String },
}

// Notifiers swallow their own failures: a run that found listings is a
// successful run whether or not the announcement went out.
#[async_trait]
pub trait ListingNotifier: Send + Sync {
    async fn notify(&self, new_listings: &[JobListing]) -> NotifyOutcome;
}
