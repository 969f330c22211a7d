use crate::types::{JobListing, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CSV_HEADER: [&str; 6] = ["title", "company", "location", "link", "source", "date_added"];

/// CSV snapshot of the latest run. Every save replaces the whole file.
#[derive(Debug, Clone)]
pub struct ListingStore {
    path: PathBuf,
}

impl ListingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `listings` to a sibling temporary file, then rename it over the
    /// snapshot so readers see either the old or the new file, never half of one.
    pub fn save(&self, listings: &[JobListing]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path();
        let replaced = write_snapshot(&temp_path, listings)
            .and_then(|()| fs::rename(&temp_path, &self.path).map_err(Into::into));
        if let Err(e) = replaced {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        debug!("Saved {} listings to {}", listings.len(), self.path.display());
        Ok(())
    }

    /// Read the snapshot back. A missing or empty file is an empty collection.
    pub fn load(&self) -> Result<Vec<JobListing>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new().from_path(&self.path)?;
        let mut listings = Vec::new();

        for (row, record) in reader.deserialize::<JobListing>().enumerate() {
            match record {
                Ok(listing) => listings.push(listing),
                Err(e) => warn!("Skipping malformed row {} in {}: {}", row + 1, self.path.display(), e),
            }
        }

        debug!("Loaded {} listings from {}", listings.len(), self.path.display());
        Ok(listings)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("jobs.csv"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn write_snapshot(path: &Path, listings: &[JobListing]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;

    // Written by hand so an empty snapshot still has its header row.
    writer.write_record(CSV_HEADER)?;
    for listing in listings {
        writer.serialize(listing)?;
    }
    writer.flush()?;
    Ok(())
}
