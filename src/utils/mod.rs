//! Utility modules for error handling, configuration and formatting

pub mod config;
pub mod error;
pub mod paths;
pub mod size;

// Re-export for convenience
pub use config::AppSettings;
pub use error::AppError;
pub use paths::{get_downloads_dir, sanitize_filename};
pub use size::format_size;
