pub mod defs;

pub use defs::{JobListing, JobSource, ListingKey, ListingNotifier, NotifyOutcome, PLACEHOLDER};
