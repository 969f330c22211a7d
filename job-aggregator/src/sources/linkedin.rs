use crate::locality::LocalityFilter;
use crate::parser::BoardLayout;
use crate::sources::BoardExtractor;
use crate::traits::PageRenderer;
use crate::types::{JobSource, Result, SearchQuery};
use std::sync::Arc;
use url::Url;

pub const SEARCH_URL: &str = "https://www.linkedin.com/jobs/search/";
pub const DEFAULT_LOCATION: &str = "Strasbourg, Grand Est, France";

pub fn search_url(query: &SearchQuery) -> Result<Url> {
    let radius = query.radius_km.to_string();
    Ok(Url::parse_with_params(
        SEARCH_URL,
        &[
            ("keywords", query.keyword.as_str()),
            ("location", query.location.as_str()),
            ("distance", radius.as_str()),
        ],
    )?)
}

/// The title anchor doubles as the link to the posting.
pub fn layout() -> Result<BoardLayout> {
    BoardLayout::new(
        ".job-card-container",
        ".job-card-list__title",
        ".job-card-container__company-name",
        ".job-card-container__metadata-item",
        Some(".job-card-list__title"),
    )
}

pub fn extractor(
    query: &SearchQuery,
    renderer: Arc<dyn PageRenderer>,
    filter: Arc<LocalityFilter>,
) -> Result<BoardExtractor> {
    Ok(BoardExtractor::new(JobSource::LinkedIn, search_url(query)?, layout()?, renderer, filter))
}
