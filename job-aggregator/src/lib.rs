pub mod types;
pub mod traits;
pub mod utils;
pub mod locality;
pub mod fetcher;
pub mod parser;
pub mod sources;
pub mod store;
pub mod aggregator;
pub mod scheduler;
pub mod config;
pub mod page;
pub mod server;

pub use types::*;
pub use traits::{PageRenderer, SourceExtractor};
pub use locality::LocalityFilter;
pub use fetcher::Fetcher;
pub use parser::{BoardLayout, CardOutcome};
pub use sources::BoardExtractor;
pub use store::ListingStore;
pub use aggregator::JobAggregator;
pub use config::AppConfig;
