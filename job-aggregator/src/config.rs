use crate::locality::DEFAULT_LOCAL_LOCATIONS;
use crate::sources::SearchSettings;
use crate::types::{AggregatorError, FetchConfig, Result};
use crate::utils::split_list;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DATA_PATH: &str = "jobs.csv";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_INTERVAL_HOURS: u64 = 12;
pub const MAX_INTERVAL_HOURS: u64 = 24 * 366;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub bind_addr: String,
    pub scrape_interval: Duration,
    pub search: SearchSettings,
    pub local_locations: Vec<String>,
    pub fetch: FetchConfig,
    pub notify: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            scrape_interval: Duration::from_secs(DEFAULT_INTERVAL_HOURS * 3600),
            search: SearchSettings::default(),
            local_locations: DEFAULT_LOCAL_LOCATIONS.iter().map(|s| s.to_string()).collect(),
            fetch: FetchConfig::default(),
            notify: false,
        }
    }
}

impl AppConfig {
    /// Read the configuration from the process environment, falling back to
    /// defaults for anything unset. Mail settings are not read here; the
    /// notifier looks them up when it sends.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let interval_hours: u64 = parse_env("SCRAPE_INTERVAL_HOURS", DEFAULT_INTERVAL_HOURS)?;
        let scrape_interval = interval_from_hours(interval_hours)?;

        let local_locations = match env::var("LOCAL_LOCATIONS") {
            Ok(value) => split_list(&value),
            Err(_) => defaults.local_locations,
        };

        let search = SearchSettings {
            keyword: env::var("JOB_KEYWORD").unwrap_or(defaults.search.keyword),
            radius_km: parse_env("JOB_RADIUS_KM", defaults.search.radius_km)?,
            location: env::var("JOB_SEARCH_LOCATION").ok().filter(|value| !value.trim().is_empty()),
        };

        let fetch = FetchConfig {
            user_agent: env::var("FETCH_USER_AGENT").unwrap_or(defaults.fetch.user_agent),
            timeout_seconds: parse_env("FETCH_TIMEOUT_SECS", defaults.fetch.timeout_seconds)?,
            max_retries: parse_env("FETCH_MAX_RETRIES", defaults.fetch.max_retries)?,
            ..defaults.fetch
        };

        Ok(Self {
            data_path: env::var("JOBS_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            bind_addr: env::var("JOBS_BIND_ADDR").unwrap_or(defaults.bind_addr),
            scrape_interval,
            search,
            local_locations,
            fetch,
            notify: parse_flag("NOTIFY_NEW_LISTINGS"),
        })
    }
}

/// Scheduler period for `hours`, which must be between 1 and [`MAX_INTERVAL_HOURS`].
pub fn interval_from_hours(hours: u64) -> Result<Duration> {
    if hours == 0 || hours > MAX_INTERVAL_HOURS {
        return Err(AggregatorError::Config(format!(
            "SCRAPE_INTERVAL_HOURS must be between 1 and {}, got {}",
            MAX_INTERVAL_HOURS, hours
        )));
    }
    hours
        .checked_mul(3600)
        .map(Duration::from_secs)
        .ok_or_else(|| AggregatorError::Config(format!("SCRAPE_INTERVAL_HOURS is too large: {}", hours)))
}

fn parse_env<T: FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| AggregatorError::Config(format!("{} has an invalid value: '{}'", name, value))),
        Err(_) => Ok(default),
    }
}

fn parse_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "True" | "yes"))
        .unwrap_or(false)
}
