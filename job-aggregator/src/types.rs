use chrono::{DateTime, Utc};
use serde::Serialize;
pub use interfaces::{JobListing, JobSource, ListingKey, NotifyOutcome, PLACEHOLDER};

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_retries: u32,
    pub retry_delay_seconds: u64,
    pub max_page_size_mb: usize,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            timeout_seconds: 30,
            max_retries: 2,
            retry_delay_seconds: 2,
            max_page_size_mb: 10,
            max_redirects: 5,
        }
    }
}

/// What a board is asked for: role keyword, place and search radius.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub location: String,
    pub radius_km: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedCard {
    /// Position of the card on the page, starting at 0.
    pub index: usize,
    pub reason: String,
}

/// Everything one board produced during a run.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    pub source: JobSource,
    pub listings: Vec<JobListing>,
    pub filtered_out: usize,
    pub skipped: Vec<SkippedCard>,
    pub error: Option<String>,
}

impl ExtractionReport {
    pub fn new(source: JobSource) -> Self {
        Self {
            source,
            listings: Vec::new(),
            filtered_out: 0,
            skipped: Vec::new(),
            error: None,
        }
    }

    pub fn failed(source: JobSource, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::new(source)
        }
    }

    pub fn summary(&self) -> SourceSummary {
        SourceSummary {
            source: self.source,
            kept: self.listings.len(),
            filtered_out: self.filtered_out,
            skipped: self.skipped.clone(),
            error: self.error.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSummary {
    pub source: JobSource,
    pub kept: usize,
    pub filtered_out: usize,
    pub skipped: Vec<SkippedCard>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub listings: Vec<JobListing>,
    pub new_listings: Vec<JobListing>,
    pub sources: Vec<SourceSummary>,
    pub notification: Option<NotifyOutcome>,
}

impl RunReport {
    pub fn total(&self) -> usize {
        self.listings.len()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AggregatorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} while fetching {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Page size exceeds limit: {size_mb}MB")]
    PageTooLarge { size_mb: usize },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, AggregatorError>;
