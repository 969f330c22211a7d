use crate::types::{AggregatorError, JobListing, JobSource, Result, SkippedCard, PLACEHOLDER};
use crate::utils::normalize_whitespace;
use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

/// Where a card keeps the link to the full posting.
#[derive(Debug, Clone)]
pub enum LinkTarget {
    /// `href` of the card element itself.
    Card,
    /// `href` of the first descendant matching the selector.
    Child(Selector),
}

/// CSS selectors describing one board's result page.
#[derive(Debug, Clone)]
pub struct BoardLayout {
    pub card: Selector,
    pub title: Selector,
    pub company: Selector,
    pub location: Selector,
    pub link: LinkTarget,
}

impl BoardLayout {
    /// `link: None` reads the link from the card element itself.
    pub fn new(card: &str, title: &str, company: &str, location: &str, link: Option<&str>) -> Result<Self> {
        Ok(Self {
            card: parse_selector(card)?,
            title: parse_selector(title)?,
            company: parse_selector(company)?,
            location: parse_selector(location)?,
            link: match link {
                Some(selector) => LinkTarget::Child(parse_selector(selector)?),
                None => LinkTarget::Card,
            },
        })
    }
}

pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| AggregatorError::Selector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}

/// Values shared by every card of one page.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    pub source: JobSource,
    /// Relative links are resolved against this URL.
    pub base_url: &'a Url,
    pub date_added: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardOutcome {
    Extracted(JobListing),
    Skipped(SkippedCard),
}

/// Read every card of a result page. A card that cannot be read becomes a
/// [`CardOutcome::Skipped`] and does not affect its neighbours.
pub fn parse_cards(html: &str, layout: &BoardLayout, ctx: &ParseContext<'_>) -> Vec<CardOutcome> {
    let document = Html::parse_document(html);

    let outcomes: Vec<CardOutcome> = document
        .select(&layout.card)
        .enumerate()
        .map(|(index, card)| match parse_card(card, layout, ctx) {
            Ok(listing) => CardOutcome::Extracted(listing),
            Err(reason) => CardOutcome::Skipped(SkippedCard { index, reason }),
        })
        .collect();

    debug!("{}: found {} cards", ctx.source, outcomes.len());
    outcomes
}

fn parse_card(card: ElementRef<'_>, layout: &BoardLayout, ctx: &ParseContext<'_>) -> std::result::Result<JobListing, String> {
    let title = child_text(card, &layout.title);
    let company = child_text(card, &layout.company);
    let location = child_text(card, &layout.location);

    let href = match &layout.link {
        LinkTarget::Card => card.value().attr("href"),
        LinkTarget::Child(selector) => card.select(selector).next().and_then(|link| link.value().attr("href")),
    }
    .map(str::trim)
    .filter(|href| !href.is_empty());

    let link = match href {
        Some(href) => {
            let url = ctx
                .base_url
                .join(href)
                .map_err(|e| format!("invalid link '{}': {}", href, e))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(format!("unsupported link scheme '{}'", url.scheme()));
            }
            Some(url.to_string())
        }
        None => None,
    };

    if title.is_none() && company.is_none() && location.is_none() && link.is_none() {
        return Err("card has no readable fields".to_string());
    }

    Ok(JobListing {
        title: title.unwrap_or_else(placeholder),
        company: company.unwrap_or_else(placeholder),
        location: location.unwrap_or_else(placeholder),
        link: link.unwrap_or_else(placeholder),
        source: ctx.source,
        date_added: ctx.date_added,
    })
}

fn child_text(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(|element| normalize_whitespace(&element.text().collect::<String>()))
}

fn placeholder() -> String {
    PLACEHOLDER.to_string()
}
