use crate::config::AppConfig;
use crate::fetcher::Fetcher;
use crate::locality::LocalityFilter;
use crate::sources::default_extractors;
use crate::store::ListingStore;
use crate::traits::{PageRenderer, SourceExtractor};
use crate::types::{JobListing, ListingKey, Result, RunReport};
use chrono::Utc;
use email_notifier::EmailNotifier;
use interfaces::ListingNotifier;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Runs every board in order, replaces the snapshot and announces new listings.
///
/// Runs never overlap. A request that arrives while a run is in flight
/// waits for it; if another run that started after the request has
/// completed by the time it gets its turn, it gets that run's report
/// instead of scraping again.
pub struct JobAggregator {
    extractors: Vec<Arc<dyn SourceExtractor>>,
    store: Arc<ListingStore>,
    notifier: Option<Arc<dyn ListingNotifier>>,
    last_run: Mutex<Option<Arc<RunReport>>>,
    runs_started: AtomicU64,
}

impl JobAggregator {
    pub fn new(extractors: Vec<Arc<dyn SourceExtractor>>, store: Arc<ListingStore>) -> Self {
        Self {
            extractors,
            store,
            notifier: None,
            last_run: Mutex::new(None),
            runs_started: AtomicU64::new(0),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn ListingNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Wire the production boards, HTTP fetcher, CSV store and, when
    /// enabled, the SMTP notifier.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let renderer: Arc<dyn PageRenderer> = Arc::new(Fetcher::new(config.fetch.clone())?);
        let filter = Arc::new(LocalityFilter::new(config.local_locations.clone()));
        let extractors = default_extractors(&config.search, renderer, filter)?;
        let store = Arc::new(ListingStore::new(&config.data_path));

        let aggregator = Self::new(extractors, store);
        if config.notify {
            Ok(aggregator.with_notifier(Arc::new(EmailNotifier::smtp())))
        } else {
            Ok(aggregator)
        }
    }

    pub fn store(&self) -> &Arc<ListingStore> {
        &self.store
    }

    pub fn runs_started(&self) -> u64 {
        self.runs_started.load(Ordering::SeqCst)
    }

    pub async fn run(&self) -> Result<Arc<RunReport>> {
        let requested_after = self.runs_started.load(Ordering::SeqCst);
        let mut last_run = self.last_run.lock().await;

        if let Some(report) = last_run.as_ref() {
            if report.run_id > requested_after {
                info!("Run #{} started after this request, reusing its result", report.run_id);
                return Ok(report.clone());
            }
        }

        let run_id = self.runs_started.fetch_add(1, Ordering::SeqCst) + 1;
        let report = Arc::new(self.execute(run_id).await?);
        *last_run = Some(report.clone());
        Ok(report)
    }

    async fn execute(&self, run_id: u64) -> Result<RunReport> {
        let started_at = Utc::now();
        info!("Starting scraping run #{} over {} sources", run_id, self.extractors.len());

        let previous = match self.store.load() {
            Ok(listings) => listings,
            Err(e) => {
                warn!("Could not read previous snapshot, treating every listing as new: {}", e);
                Vec::new()
            }
        };

        let mut listings = Vec::new();
        let mut sources = Vec::with_capacity(self.extractors.len());

        for extractor in &self.extractors {
            let report = extractor.extract().await;
            sources.push(report.summary());
            listings.extend(report.listings);
        }

        self.store.save(&listings)?;
        info!("Scraping finished: {} listings found", listings.len());

        let new_listings = new_listings(&previous, &listings);
        let notification = match &self.notifier {
            Some(notifier) => Some(notifier.notify(&new_listings).await),
            None => None,
        };

        Ok(RunReport {
            run_id,
            started_at,
            finished_at: Utc::now(),
            listings,
            new_listings,
            sources,
            notification,
        })
    }
}

/// Listings of `current` whose (title, company, link) does not appear in `previous`.
pub fn new_listings(previous: &[JobListing], current: &[JobListing]) -> Vec<JobListing> {
    let seen: HashSet<ListingKey> = previous.iter().map(JobListing::key).collect();
    current
        .iter()
        .filter(|listing| !seen.contains(&listing.key()))
        .cloned()
        .collect()
}
