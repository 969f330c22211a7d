use std::sync::OnceLock;

pub const DEFAULT_LOCAL_LOCATIONS: [&str; 4] = ["Strasbourg", "Alsace", "Grand Est", "67000"];

/// Substring test deciding whether a free-text location is in the area.
///
/// Matching folds case but does nothing else: no accent folding and no
/// tokenization, so "67000" also matches inside "F-67000".
#[derive(Debug, Clone)]
pub struct LocalityFilter {
    fragments: Vec<String>,
    folded: Vec<String>,
}

impl LocalityFilter {
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // A blank fragment would be a substring of everything.
        let fragments: Vec<String> = fragments
            .into_iter()
            .map(Into::into)
            .filter(|fragment| !fragment.trim().is_empty())
            .collect();
        let folded = fragments.iter().map(|fragment| fragment.to_lowercase()).collect();

        Self { fragments, folded }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn is_local(&self, location: Option<&str>) -> bool {
        let location = match location {
            Some(location) if !location.is_empty() => location.to_lowercase(),
            _ => return false,
        };

        self.folded.iter().any(|fragment| location.contains(fragment.as_str()))
    }
}

impl Default for LocalityFilter {
    fn default() -> Self {
        Self::new(DEFAULT_LOCAL_LOCATIONS)
    }
}

/// The filter built from [`DEFAULT_LOCAL_LOCATIONS`], shared process-wide.
pub fn default_filter() -> &'static LocalityFilter {
    static DEFAULT: OnceLock<LocalityFilter> = OnceLock::new();
    DEFAULT.get_or_init(LocalityFilter::default)
}

pub fn is_local(location: Option<&str>) -> bool {
    default_filter().is_local(location)
}
