//! Format listing and downloading on top of a media extractor

pub mod downloader;
pub mod lister;

pub use downloader::{serve, serve_to_file, DownloadResult, Downloader, ServedFile};
pub use lister::{list_formats, select_muxed};
