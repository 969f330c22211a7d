use crate::locality::LocalityFilter;
use crate::parser::{parse_cards, BoardLayout, CardOutcome, ParseContext};
use crate::traits::{PageRenderer, SourceExtractor};
use crate::types::{ExtractionReport, JobSource};
use async_trait::async_trait;
use chrono::Local;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use url::Url;

/// Scrapes one board's search page with a fixed layout and query.
pub struct BoardExtractor {
    source: JobSource,
    search_url: Url,
    layout: BoardLayout,
    renderer: Arc<dyn PageRenderer>,
    filter: Arc<LocalityFilter>,
}

impl BoardExtractor {
    pub fn new(
        source: JobSource,
        search_url: Url,
        layout: BoardLayout,
        renderer: Arc<dyn PageRenderer>,
        filter: Arc<LocalityFilter>,
    ) -> Self {
        Self {
            source,
            search_url,
            layout,
            renderer,
            filter,
        }
    }

    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// Sort parsed cards into kept, filtered and skipped.
    pub fn collect(&self, outcomes: Vec<CardOutcome>) -> ExtractionReport {
        let mut report = ExtractionReport::new(self.source);

        for outcome in outcomes {
            match outcome {
                CardOutcome::Extracted(listing) => {
                    if self.filter.is_local(Some(listing.location.as_str())) {
                        report.listings.push(listing);
                    } else {
                        debug!("{}: '{}' at '{}' is outside the area", self.source, listing.title, listing.location);
                        report.filtered_out += 1;
                    }
                }
                CardOutcome::Skipped(skipped) => {
                    warn!("{}: skipping card {}: {}", self.source, skipped.index, skipped.reason);
                    report.skipped.push(skipped);
                }
            }
        }

        report
    }
}

#[async_trait]
impl SourceExtractor for BoardExtractor {
    fn source(&self) -> JobSource {
        self.source
    }

    async fn extract(&self) -> ExtractionReport {
        info!("Scraping {}: {}", self.source, self.search_url);

        let html = match self.renderer.render(&self.search_url).await {
            Ok(html) => html,
            Err(e) => {
                error!("Failed to scrape {}: {}", self.source, e);
                return ExtractionReport::failed(self.source, e.to_string());
            }
        };

        let ctx = ParseContext {
            source: self.source,
            base_url: &self.search_url,
            date_added: Local::now().date_naive(),
        };
        let report = self.collect(parse_cards(&html, &self.layout, &ctx));

        info!(
            "{}: kept {} listings ({} outside the area, {} skipped)",
            self.source,
            report.listings.len(),
            report.filtered_out,
            report.skipped.len()
        );
        report
    }
}
