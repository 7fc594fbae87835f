//! File-backed profile source.
//!
//! Reads a profile previously exported to disk. The "url" is a local path,
//! optionally prefixed with `file://`.

use async_trait::async_trait;
use linkwise_core::{ProfileData, ProfileScraper, ScrapeError};
use tracing::debug;

pub struct FileProfileScraper;

#[async_trait]
impl ProfileScraper for FileProfileScraper {
    async fn fetch(&self, url: &str) -> Result<ProfileData, ScrapeError> {
        let path = url.strip_prefix("file://").unwrap_or(url);
        debug!(path, "Reading profile file");

        match tokio::fs::read_to_string(path).await {
            Ok(raw) => Ok(ProfileData::new(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ScrapeError::NotFound(path.to_string()))
            }
            Err(e) => Err(ScrapeError::Unavailable(format!("{path}: {e}"))),
        }
    }
}
