//! Per-session state for one interactive visit

use crate::extractor::FormatDescriptor;
use crate::service::ServedFile;
use crate::session::selection::{build_options, FormatOption};
use crate::utils::error::AppError;
use std::cmp::Reverse;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const FETCH_SUCCESS: &str = "Available formats fetched successfully!";
pub const DOWNLOAD_SUCCESS: &str = "Video downloaded successfully!";
pub const DOWNLOAD_CANCELLED: &str = "Download cancelled.";
pub const IDLE_HINT: &str = "Enter a URL and click 'Fetch Formats' to see available resolutions.";

/// Banner shown after each action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Info(String),
    Success(String),
    Warning(String),
    Error(String),
}

impl Banner {
    pub fn message(&self) -> &str {
        match self {
            Banner::Info(m) | Banner::Success(m) | Banner::Warning(m) | Banner::Error(m) => m,
        }
    }
}

impl From<AppError> for Banner {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation => Banner::Warning(err.to_string()),
            other => Banner::Error(other.to_string()),
        }
    }
}

/// State scoped to one user's visit
///
/// The format list is only ever replaced as a whole, by a successful fetch,
/// and is kept sorted by height descending.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    source_url: Option<String>,
    formats: Vec<FormatDescriptor>,
    options: Vec<FormatOption>,
    selected: Option<FormatOption>,
    banner: Banner,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let id = Uuid::new_v4();
        debug!("Session {} started", id);
        Self {
            id,
            source_url: None,
            formats: Vec::new(),
            options: Vec::new(),
            selected: None,
            banner: Banner::Info(IDLE_HINT.to_string()),
        }
    }

    pub fn formats(&self) -> &[FormatDescriptor] {
        &self.formats
    }

    pub fn options(&self) -> &[FormatOption] {
        &self.options
    }

    pub fn selected(&self) -> Option<&FormatOption> {
        self.selected.as_ref()
    }

    /// URL the current format list was fetched for
    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    /// Check a fetch request before any extractor call.
    ///
    /// An empty URL is rejected with a warning banner; anything else is
    /// passed through untouched for the extractor to judge.
    pub fn begin_fetch(&mut self, url: &str) -> Result<String, AppError> {
        if url.is_empty() {
            warn!("Session {}: fetch requested without a URL", self.id);
            self.banner = AppError::Validation.into();
            return Err(AppError::Validation);
        }
        Ok(url.to_string())
    }

    /// Apply the outcome of a fetch. Failures leave the previous list in place.
    pub fn finish_fetch(&mut self, url: String, result: Result<Vec<FormatDescriptor>, AppError>) {
        match result {
            Ok(mut formats) => {
                // stable: equal heights keep the extractor order
                formats.sort_by_key(|f| Reverse(f.sort_height()));
                info!(
                    "Session {}: {} formats for {}",
                    self.id,
                    formats.len(),
                    url
                );
                self.options = build_options(&formats);
                self.selected = self.options.first().cloned();
                self.formats = formats;
                self.source_url = Some(url);
                self.banner = Banner::Success(FETCH_SUCCESS.to_string());
            }
            Err(e) => {
                warn!("Session {}: fetch failed: {}", self.id, e);
                self.banner = e.into();
            }
        }
    }

    /// Choose a format. Options that are not part of the current list are ignored.
    pub fn select(&mut self, option: FormatOption) {
        if self.options.contains(&option) {
            self.selected = Some(option);
        } else {
            debug!("Session {}: ignoring stale selection {}", self.id, option.label);
        }
    }

    /// URL and format id to download, if a format is selected
    pub fn begin_download(&self) -> Option<(String, String)> {
        let url = self.source_url.clone()?;
        let option = self.selected.as_ref()?;
        Some((url, option.format_id.clone()))
    }

    /// Apply the outcome of a download. The format list is never touched, so
    /// a failed download can simply be retried.
    ///
    /// `Ok(None)` means the user declined to save the file.
    pub fn finish_download(&mut self, result: Result<Option<ServedFile>, AppError>) {
        self.banner = match result {
            Ok(Some(served)) => {
                info!("Session {}: delivered {}", self.id, served.file_name);
                Banner::Success(DOWNLOAD_SUCCESS.to_string())
            }
            Ok(None) => Banner::Info(DOWNLOAD_CANCELLED.to_string()),
            Err(e) => {
                warn!("Session {}: download failed: {}", self.id, e);
                e.into()
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(id: &str, height: u32) -> FormatDescriptor {
        FormatDescriptor {
            format_id: id.to_string(),
            height: Some(height),
            ext: "mp4".to_string(),
            ..Default::default()
        }
    }

    fn fetched_session() -> Session {
        let mut session = Session::new();
        session.finish_fetch(
            "https://example.com/v".to_string(),
            Ok(vec![format("22", 720), format("18", 360)]),
        );
        session
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new();
        assert!(session.formats().is_empty());
        assert!(session.selected().is_none());
        assert_eq!(session.banner(), &Banner::Info(IDLE_HINT.to_string()));
        assert!(session.begin_download().is_none());
    }

    #[test]
    fn test_empty_url_is_rejected_with_warning() {
        let mut session = Session::new();
        assert_eq!(session.begin_fetch(""), Err(AppError::Validation));
        assert_eq!(
            session.banner(),
            &Banner::Warning("Please enter a valid URL.".to_string())
        );
    }

    #[test]
    fn test_url_passes_through_unvalidated() {
        let mut session = Session::new();
        assert_eq!(session.begin_fetch("not a url"), Ok("not a url".to_string()));
    }

    #[test]
    fn test_successful_fetch_replaces_state() {
        let mut session = fetched_session();
        assert_eq!(session.options().len(), 2);
        assert_eq!(session.selected().unwrap().format_id, "22");
        assert_eq!(session.banner(), &Banner::Success(FETCH_SUCCESS.to_string()));

        session.finish_fetch(
            "https://example.com/other".to_string(),
            Ok(vec![format("37", 1080)]),
        );
        assert_eq!(session.formats().len(), 1);
        assert_eq!(session.selected().unwrap().format_id, "37");
        assert_eq!(session.source_url(), Some("https://example.com/other"));
    }

    #[test]
    fn test_failed_fetch_keeps_previous_formats() {
        let mut session = fetched_session();
        session.finish_fetch(
            "https://example.com/broken".to_string(),
            Err(AppError::Fetch("ERROR: Private video".to_string())),
        );
        assert_eq!(session.formats().len(), 2);
        assert_eq!(session.source_url(), Some("https://example.com/v"));
        assert_eq!(
            session.banner(),
            &Banner::Error("Failed to fetch formats: ERROR: Private video".to_string())
        );
    }

    #[test]
    fn test_selection_drives_download_request() {
        let mut session = fetched_session();
        let second = session.options()[1].clone();
        session.select(second);
        assert_eq!(
            session.begin_download(),
            Some(("https://example.com/v".to_string(), "18".to_string()))
        );
    }

    #[test]
    fn test_stale_selection_is_ignored() {
        let mut session = fetched_session();
        session.select(FormatOption {
            label: "old".to_string(),
            format_id: "99".to_string(),
        });
        assert_eq!(session.selected().unwrap().format_id, "22");
    }

    #[test]
    fn test_download_outcomes_never_touch_formats() {
        let mut session = fetched_session();

        session.finish_download(Err(AppError::Download("HTTP Error 403".to_string())));
        assert_eq!(
            session.banner(),
            &Banner::Error("Download failed: HTTP Error 403".to_string())
        );
        assert_eq!(session.formats().len(), 2);
        assert!(session.begin_download().is_some());

        session.finish_download(Ok(None));
        assert_eq!(session.banner().message(), DOWNLOAD_CANCELLED);

        session.finish_download(Ok(Some(ServedFile {
            file_name: "a.mp4".to_string(),
            mime: "video/mp4".to_string(),
            bytes: 1,
        })));
        assert_eq!(session.banner(), &Banner::Success(DOWNLOAD_SUCCESS.to_string()));
        assert_eq!(session.formats().len(), 2);
    }
}
