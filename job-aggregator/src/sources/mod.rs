pub mod apec;
pub mod board;
pub mod indeed;
pub mod linkedin;

pub use board::BoardExtractor;

use crate::locality::LocalityFilter;
use crate::traits::{PageRenderer, SourceExtractor};
use crate::types::{JobSource, Result, SearchQuery};
use std::sync::Arc;

/// Search terms shared by the boards. Each board phrases the place its own
/// way unless `location` overrides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub keyword: String,
    pub radius_km: u32,
    pub location: Option<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            keyword: "designer".to_string(),
            radius_km: 25,
            location: None,
        }
    }
}

impl SearchSettings {
    pub fn query_for(&self, source: JobSource) -> SearchQuery {
        let location = self.location.clone().unwrap_or_else(|| {
            match source {
                JobSource::LinkedIn => linkedin::DEFAULT_LOCATION,
                JobSource::Indeed => indeed::DEFAULT_LOCATION,
                JobSource::Apec => apec::DEFAULT_LOCATION,
            }
            .to_string()
        });

        SearchQuery {
            keyword: self.keyword.clone(),
            location,
            radius_km: self.radius_km,
        }
    }
}

pub fn extractor_for(
    source: JobSource,
    query: &SearchQuery,
    renderer: Arc<dyn PageRenderer>,
    filter: Arc<LocalityFilter>,
) -> Result<BoardExtractor> {
    match source {
        JobSource::LinkedIn => linkedin::extractor(query, renderer, filter),
        JobSource::Indeed => indeed::extractor(query, renderer, filter),
        JobSource::Apec => apec::extractor(query, renderer, filter),
    }
}

/// One extractor per board, in scraping order.
pub fn default_extractors(
    settings: &SearchSettings,
    renderer: Arc<dyn PageRenderer>,
    filter: Arc<LocalityFilter>,
) -> Result<Vec<Arc<dyn SourceExtractor>>> {
    JobSource::ALL
        .iter()
        .map(|&source| {
            let query = settings.query_for(source);
            let extractor = extractor_for(source, &query, renderer.clone(), filter.clone())?;
            Ok(Arc::new(extractor) as Arc<dyn SourceExtractor>)
        })
        .collect()
}
