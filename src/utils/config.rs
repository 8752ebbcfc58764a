//! Application configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::get_downloads_dir;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Explicit yt-dlp binary, bypassing discovery
    pub ytdlp_path: Option<PathBuf>,

    /// Where in-flight downloads are staged before being handed to the user
    pub temp_dir: PathBuf,

    /// Default target directory for headless downloads
    pub download_location: PathBuf,

    /// URL pre-filled into the input field on launch
    pub initial_url: Option<String>,

    /// Initial window size (width, height)
    pub window_size: (f32, f32),
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            ytdlp_path: None,
            temp_dir: std::env::temp_dir(),
            download_location: get_downloads_dir(),
            initial_url: None,
            window_size: (760.0, 520.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppSettings::default();
        assert!(config.ytdlp_path.is_none());
        assert!(config.initial_url.is_none());
        assert_eq!(config.temp_dir, std::env::temp_dir());
        assert!(config.window_size.0 > 0.0 && config.window_size.1 > 0.0);
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = AppSettings {
            ytdlp_path: Some(PathBuf::from("/opt/bin/yt-dlp")),
            initial_url: Some("https://example.com/v".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ytdlp_path, config.ytdlp_path);
        assert_eq!(back.initial_url, config.initial_url);
    }
}
