use crate::traits::PageRenderer;
use crate::types::{AggregatorError, FetchConfig, Result};
use async_trait::async_trait;
use backoff::{backoff::Backoff, exponential::ExponentialBackoff};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, Response};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};
use url::Url;

/// Plain HTTP page renderer with retries.
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("fr-FR,fr;q=0.9,en;q=0.8"));

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(headers)
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self { client, config })
    }

    pub async fn fetch_page(&self, url: &Url) -> Result<String> {
        let start_time = Instant::now();
        debug!("Fetching page: {}", url);

        let mut backoff: ExponentialBackoff<backoff::SystemClock> = ExponentialBackoff {
            current_interval: Duration::from_secs(self.config.retry_delay_seconds),
            initial_interval: Duration::from_secs(self.config.retry_delay_seconds),
            max_interval: Duration::from_secs(self.config.retry_delay_seconds * 32),
            multiplier: 2.0,
            max_elapsed_time: Some(Duration::from_secs(self.config.retry_delay_seconds * 60)),
            ..Default::default()
        };

        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            match self.try_fetch(url).await {
                Ok(content) => {
                    info!(
                        "Fetched {} ({} bytes in {}ms)",
                        url,
                        content.len(),
                        start_time.elapsed().as_millis()
                    );
                    return Ok(content);
                }
                // Retrying will not make the page smaller.
                Err(e @ AggregatorError::PageTooLarge { .. }) => return Err(e),
                Err(e) => {
                    last_error = Some(e);

                    if attempt < self.config.max_retries {
                        if let Some(delay) = backoff.next_backoff() {
                            warn!("Attempt {} failed for {}, retrying in {:?}", attempt + 1, url, delay);
                            tokio::time::sleep(delay).await;
                            continue;
                        }
                    }
                    break;
                }
            }
        }

        error!("Failed to fetch page after {} attempts: {}", self.config.max_retries + 1, url);
        Err(last_error.unwrap_or_else(|| AggregatorError::General(format!("Could not fetch {}", url))))
    }

    async fn try_fetch(&self, url: &Url) -> Result<String> {
        let response = self.client.get(url.clone()).send().await?;
        let response = self.check_response(url, response)?;
        self.read_body(response).await
    }

    /// Read the body chunk by chunk, giving up as soon as it passes the size
    /// limit. Responses without a Content-Length are only bounded here.
    async fn read_body(&self, mut response: Response) -> Result<String> {
        let limit = self.config.max_page_size_mb * 1024 * 1024;
        let mut body = Vec::new();

        while let Some(chunk) = response.chunk().await? {
            body.extend_from_slice(&chunk);
            if body.len() > limit {
                return Err(AggregatorError::PageTooLarge {
                    size_mb: body.len() / (1024 * 1024),
                });
            }
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    fn check_response(&self, url: &Url, response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            return Err(AggregatorError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        if let Some(content_length) = response.content_length() {
            let size_mb = content_length as usize / (1024 * 1024);
            if size_mb > self.config.max_page_size_mb {
                return Err(AggregatorError::PageTooLarge { size_mb });
            }
        }

        Ok(response)
    }
}

#[async_trait]
impl PageRenderer for Fetcher {
    async fn render(&self, url: &Url) -> Result<String> {
        self.fetch_page(url).await
    }
}
