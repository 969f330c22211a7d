use crate::locality::LocalityFilter;
use crate::parser::BoardLayout;
use crate::sources::BoardExtractor;
use crate::traits::PageRenderer;
use crate::types::{JobSource, Result, SearchQuery};
use std::sync::Arc;
use url::Url;

pub const SEARCH_URL: &str = "https://www.apec.fr/candidat/recherche-emploi.html/emploi";
pub const DEFAULT_LOCATION: &str = "Strasbourg 67000";

pub fn search_url(query: &SearchQuery) -> Result<Url> {
    let radius = query.radius_km.to_string();
    Ok(Url::parse_with_params(
        SEARCH_URL,
        &[
            ("motsCles", query.keyword.as_str()),
            ("localisation", query.location.as_str()),
            ("distance", radius.as_str()),
        ],
    )?)
}

pub fn layout() -> Result<BoardLayout> {
    BoardLayout::new(
        ".card-offer",
        ".card-title",
        ".card-offer__company",
        ".card-offer__location",
        Some("a"),
    )
}

pub fn extractor(
    query: &SearchQuery,
    renderer: Arc<dyn PageRenderer>,
    filter: Arc<LocalityFilter>,
) -> Result<BoardExtractor> {
    Ok(BoardExtractor::new(JobSource::Apec, search_url(query)?, layout()?, renderer, filter))
}
