pub mod models;
pub mod traits;
pub mod ytdlp;

pub use models::{FormatDescriptor, MediaInfo};
pub use traits::MediaExtractor;
pub use ytdlp::YtDlpExtractor;
