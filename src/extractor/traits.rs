use crate::extractor::models::MediaInfo;
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

/// Core trait for media extraction backends
///
/// This trait isolates the application from the concrete extraction tool, so
/// the session and download logic can run against a stand-in in tests.
#[async_trait]
pub trait MediaExtractor: Send + Sync {
    /// Returns a unique identifier for this extractor (e.g. "yt-dlp")
    fn id(&self) -> &'static str;

    /// Extracts media information without downloading anything
    async fn extract_info(&self, url: &str) -> Result<MediaInfo>;

    /// Downloads exactly the stream identified by `format_id` into `target`,
    /// overwriting whatever is there, and reports what was written
    async fn download(&self, url: &str, format_id: &str, target: &Path) -> Result<MediaInfo>;
}
