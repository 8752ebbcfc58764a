//! Session context and selection rendering

pub mod selection;
pub mod state;

pub use selection::{build_options, display_label, parse_format_id, FormatOption};
pub use state::{Banner, Session};
