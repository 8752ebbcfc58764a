//! Headless entry points for scripting and smoke tests

use crate::extractor::MediaExtractor;
use crate::service::{self, Downloader, ServedFile};
use crate::session::{parse_format_id, Session};
use crate::utils::{sanitize_filename, AppError};
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Print one display label per muxed format of `url`, best first.
///
/// Returns the number of formats printed.
pub async fn print_formats<W: Write>(
    extractor: &dyn MediaExtractor,
    url: &str,
    out: &mut W,
) -> Result<usize> {
    let mut session = Session::new();
    let url = session.begin_fetch(url)?;
    let formats = service::list_formats(extractor, &url).await?;
    session.finish_fetch(url, Ok(formats));

    if session.options().is_empty() {
        writeln!(out, "No formats with both video and audio are available.")?;
    }
    for option in session.options() {
        writeln!(out, "{}", option)?;
    }
    Ok(session.options().len())
}

/// Format id named by a `--format` argument: either a bare id or a whole
/// label copied from `--list-formats` output.
pub fn resolve_format_id(arg: &str) -> &str {
    parse_format_id(arg).unwrap_or(arg)
}

/// Download `format_id` of `url` and write it to `output`, or to
/// `<default_dir>/<title>.<ext>` when no output is given.
///
/// `format_id` may also be a pasted display label.
pub async fn download_to_file(
    downloader: &Downloader,
    url: &str,
    format_id: &str,
    output: Option<&Path>,
    default_dir: &Path,
) -> Result<ServedFile> {
    if url.is_empty() {
        return Err(AppError::Validation.into());
    }

    let format_id = resolve_format_id(format_id);
    let result = downloader.download(url, format_id).await?;
    let target = match output {
        Some(path) => path.to_path_buf(),
        None => default_dir.join(sanitize_filename(&result.file_name())),
    };

    let served = service::serve_to_file(result, &target).await?;
    info!("Saved {} to {}", served.file_name, target.display());

    Ok(served)
}
