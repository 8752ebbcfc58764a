//! Error handling for vidgrab

use thiserror::Error;

/// Main error type for vidgrab
///
/// Every user action ends in one of these kinds; the GUI maps each kind to a
/// fixed banner template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Failed to fetch formats: {0}")]
    Fetch(String),

    #[error("Download failed: {0}")]
    Download(String),

    #[error("Please enter a valid URL.")]
    Validation,

    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,
}

impl AppError {
    /// Wrap an extraction failure, keeping the whole context chain
    pub fn fetch(err: impl Into<anyhow::Error>) -> Self {
        AppError::Fetch(format!("{:#}", err.into()))
    }

    /// Wrap a download or serving failure, keeping the whole context chain
    pub fn download(err: impl Into<anyhow::Error>) -> Self {
        AppError::Download(format!("{:#}", err.into()))
    }
}
