//! vidgrab library

pub mod cli;
pub mod extractor;
pub mod gui;
pub mod service;
pub mod session;
pub mod utils;

// Re-export main types for easier use
pub use extractor::{FormatDescriptor, MediaExtractor, MediaInfo, YtDlpExtractor};
pub use gui::{Message, VidgrabApp};
pub use service::{list_formats, serve, DownloadResult, Downloader, ServedFile};
pub use session::{Banner, FormatOption, Session};
pub use utils::{format_size, AppError, AppSettings};
