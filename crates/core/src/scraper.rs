//! ProfileScraper trait: where raw profile data comes from.
//!
//! The scraping itself lives outside the pipeline. A failure here means
//! "no profile available" and never aborts the session.

use async_trait::async_trait;

use crate::error::ScrapeError;
use crate::session::ProfileData;

#[async_trait]
pub trait ProfileScraper: Send + Sync {
    /// Fetch the raw profile found at `url`.
    async fn fetch(&self, url: &str) -> Result<ProfileData, ScrapeError>;
}
