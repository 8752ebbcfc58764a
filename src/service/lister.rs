//! Listing of downloadable format variants

use crate::extractor::{FormatDescriptor, MediaExtractor};
use crate::utils::error::AppError;
use tracing::{debug, error, info, warn};

/// Reason reported when the extractor returns a document without variants
pub const NO_FORMATS: &str = "no formats reported for this URL";

/// Fetch the muxed formats available for `url`, highest resolution first.
///
/// The URL is handed to the extractor as-is; rejecting malformed or
/// unsupported URLs is the extractor's job. A document that carries no
/// `formats` at all (a playlist page, for one) is a fetch error, not an
/// empty list.
pub async fn list_formats(
    extractor: &dyn MediaExtractor,
    url: &str,
) -> Result<Vec<FormatDescriptor>, AppError> {
    debug!("Listing formats for {} via {}", url, extractor.id());

    let info = extractor.extract_info(url).await.map_err(|e| {
        error!("Format listing failed for {}: {:#}", url, e);
        AppError::fetch(e)
    })?;

    let Some(all) = info.formats else {
        warn!("No formats in the document for {} ('{}')", url, info.title);
        return Err(AppError::Fetch(NO_FORMATS.to_string()));
    };

    let total = all.len();
    let formats = select_muxed(all);
    info!(
        "Found {} muxed formats out of {} for '{}'",
        formats.len(),
        total,
        info.title
    );

    Ok(formats)
}

/// Keep streams carrying both video and audio, sorted by height descending.
///
/// Unknown heights sort as 0. The sort is stable, so equal heights keep the
/// extractor's order.
pub fn select_muxed(formats: Vec<FormatDescriptor>) -> Vec<FormatDescriptor> {
    let mut muxed: Vec<FormatDescriptor> = formats.into_iter().filter(|f| f.is_muxed()).collect();
    muxed.sort_by(|a, b| b.sort_height().cmp(&a.sort_height()));
    muxed
}
