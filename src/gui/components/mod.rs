//! GUI components

pub mod banner;
pub mod format_selector;
pub mod url_input;

// Re-export for convenience
pub use banner::banner;
pub use format_selector::format_selector;
pub use url_input::url_input;
