use crate::types::{ExtractionReport, JobSource, Result};
use async_trait::async_trait;
use url::Url;

/// Turns a URL into the HTML of the page a visitor would see.
///
/// The bundled [`crate::Fetcher`] issues plain HTTP requests; a headless
/// browser can stand in for it when a board only renders client side.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    async fn render(&self, url: &Url) -> Result<String>;
}

/// One job board.
#[async_trait]
pub trait SourceExtractor: Send + Sync {
    fn source(&self) -> JobSource;

    /// Scrape the board once and keep the local listings.
    /// Never fails: a board that cannot be reached yields an empty report
    /// carrying the error.
    async fn extract(&self) -> ExtractionReport;
}
