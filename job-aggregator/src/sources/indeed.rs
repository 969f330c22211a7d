use crate::locality::LocalityFilter;
use crate::parser::BoardLayout;
use crate::sources::BoardExtractor;
use crate::traits::PageRenderer;
use crate::types::{JobSource, Result, SearchQuery};
use std::sync::Arc;
use url::Url;

pub const SEARCH_URL: &str = "https://fr.indeed.com/jobs";
pub const DEFAULT_LOCATION: &str = "Strasbourg (67)";

pub fn search_url(query: &SearchQuery) -> Result<Url> {
    let radius = query.radius_km.to_string();
    Ok(Url::parse_with_params(
        SEARCH_URL,
        &[
            ("q", query.keyword.as_str()),
            ("l", query.location.as_str()),
            ("radius", radius.as_str()),
        ],
    )?)
}

// Indeed class names carry generated suffixes, hence the substring matches.
// The card itself holds the href.
pub fn layout() -> Result<BoardLayout> {
    BoardLayout::new(
        ".job_seen_beacon",
        r#"[class*="jobTitle"]"#,
        r#"[class*="companyName"]"#,
        r#"[class*="companyLocation"]"#,
        None,
    )
}

pub fn extractor(
    query: &SearchQuery,
    renderer: Arc<dyn PageRenderer>,
    filter: Arc<LocalityFilter>,
) -> Result<BoardExtractor> {
    Ok(BoardExtractor::new(JobSource::Indeed, search_url(query)?, layout()?, renderer, filter))
}
