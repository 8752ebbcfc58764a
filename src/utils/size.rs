//! Human-readable file sizes

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Convert a byte count to a readable size string (e.g. "12.34 MB").
///
/// Anything below 1024 MB stays in megabytes; larger values switch to
/// gigabytes. A missing size renders as "unknown size".
pub fn format_size(size: Option<u64>) -> String {
    let Some(bytes) = size else {
        return "unknown size".to_string();
    };

    let size_mb = bytes as f64 / BYTES_PER_MB;
    if size_mb < 1024.0 {
        format!("{:.2} MB", size_mb)
    } else {
        format!("{:.2} GB", size_mb / 1024.0)
    }
}
