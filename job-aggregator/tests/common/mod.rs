// Test doubles and HTML fixtures shared by the integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use interfaces::{ListingNotifier, NotifyOutcome};
use job_aggregator::{
    AggregatorError, ExtractionReport, JobListing, JobSource, PageRenderer, Result, SourceExtractor,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use std::time::Duration;
use url::Url;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .try_init()
            .ok();
    });
}

pub fn listing(title: &str, company: &str, location: &str, link: &str, source: JobSource) -> JobListing {
    JobListing {
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        link: link.to_string(),
        source,
        date_added: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Serves canned HTML per host; any other host fails like a dead network.
#[derive(Default)]
pub struct StaticRenderer {
    pages: HashMap<String, String>,
    pub requested: Mutex<Vec<String>>,
}

impl StaticRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, host: &str, html: &str) -> Self {
        self.pages.insert(host.to_string(), html.to_string());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageRenderer for StaticRenderer {
    async fn render(&self, url: &Url) -> Result<String> {
        self.requested.lock().unwrap().push(url.to_string());
        let host = url.host_str().unwrap_or_default();
        self.pages
            .get(host)
            .cloned()
            .ok_or_else(|| AggregatorError::General(format!("connection refused: {}", host)))
    }
}

/// Returns the same listings on every call, optionally after a delay.
pub struct ScriptedExtractor {
    source: JobSource,
    listings: Vec<JobListing>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl ScriptedExtractor {
    pub fn new(source: JobSource, listings: Vec<JobListing>) -> Self {
        Self {
            source,
            listings,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SourceExtractor for ScriptedExtractor {
    fn source(&self) -> JobSource {
        self.source
    }

    async fn extract(&self) -> ExtractionReport {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let mut report = ExtractionReport::new(self.source);
        report.listings = self.listings.clone();
        report
    }
}

/// Remembers what it was asked to announce.
#[derive(Default)]
pub struct RecordingNotifier {
    pub calls: Mutex<Vec<Vec<JobListing>>>,
}

impl RecordingNotifier {
    pub fn calls(&self) -> Vec<Vec<JobListing>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListingNotifier for RecordingNotifier {
    async fn notify(&self, new_listings: &[JobListing]) -> NotifyOutcome {
        self.calls.lock().unwrap().push(new_listings.to_vec());
        if new_listings.is_empty() {
            NotifyOutcome::Skipped
        } else {
            NotifyOutcome::Sent {
                count: new_listings.len(),
            }
        }
    }
}

pub const LINKEDIN_PAGE: &str = r#"
<html><body><ul>
  <li class="job-card-container">
    <a class="job-card-list__title" href="/jobs/view/101">
      UX   Designer
    </a>
    <span class="job-card-container__company-name"> Studio Kléber </span>
    <ul><li class="job-card-container__metadata-item">Strasbourg, Grand Est, France</li></ul>
  </li>
  <li class="job-card-container">
    <a class="job-card-list__title" href="https://www.linkedin.com/jobs/view/102">Product Designer</a>
    <span class="job-card-container__company-name">Paris Design Co</span>
    <ul><li class="job-card-container__metadata-item">Paris, Île-de-France</li></ul>
  </li>
  <li class="job-card-container">
    <a class="job-card-list__title" href="/jobs/view/103">Motion Designer</a>
    <ul><li class="job-card-container__metadata-item">STRASBOURG Centre</li></ul>
  </li>
</ul></body></html>
"#;

pub const INDEED_PAGE: &str = r#"
<html><body>
  <div class="job_seen_beacon" href="/rc/clk?jk=abc">
    <h2 class="jobTitle css-1psdjh5"><span>Graphiste</span></h2>
    <span class="companyName">Imprimerie du Rhin</span>
    <div class="companyLocation">67000 Strasbourg</div>
  </div>
  <div class="job_seen_beacon">
    <h2 class="jobTitle">Designer produit</h2>
    <span class="companyName">Atelier Colmar</span>
    <div class="companyLocation">Colmar (68), Alsace</div>
  </div>
</body></html>
"#;

pub const APEC_PAGE: &str = r#"
<html><body>
  <div class="card-offer">
    <a href="/candidat/offre/1">
      <h2 class="card-title">Designer UI</h2>
      <p class="card-offer__company">Eurométropole</p>
      <p class="card-offer__location">Strasbourg - 67</p>
    </a>
  </div>
  <div class="card-offer">
    <a href="https://[broken">
      <h2 class="card-title">Designer cassé</h2>
      <p class="card-offer__location">Strasbourg - 67</p>
    </a>
  </div>
  <div class="card-offer"></div>
  <div class="card-offer">
    <a href="/candidat/offre/3">
      <h2 class="card-title">Designer industriel</h2>
      <p class="card-offer__company">Mécanique Alsace</p>
      <p class="card-offer__location">Haguenau, Grand Est</p>
    </a>
  </div>
  <div class="card-offer">
    <a href="javascript:alert(document.cookie)">
      <h2 class="card-title">Designer web</h2>
      <p class="card-offer__location">Strasbourg - 67</p>
    </a>
  </div>
</body></html>
"#;
