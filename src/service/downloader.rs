//! Downloading a chosen format into a scoped temporary file and handing it
//! over to the user

use crate::extractor::MediaExtractor;
use crate::utils::error::AppError;
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempPath;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};

/// Container assumed when the extractor does not report one
const DEFAULT_EXT: &str = "mp4";

/// A completed download waiting to be handed to the user
///
/// Owns the temporary file: dropping the result deletes it, whichever way
/// the surrounding request ends.
#[derive(Debug)]
pub struct DownloadResult {
    file: TempPath,
    title: String,
    ext: String,
}

impl DownloadResult {
    pub fn path(&self) -> &Path {
        &self.file
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn ext(&self) -> &str {
        &self.ext
    }

    /// Name offered to the user: "<title>.<ext>"
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.title, self.ext)
    }

    /// MIME type of the download: "video/<ext>"
    pub fn mime(&self) -> String {
        format!("video/{}", self.ext)
    }
}

/// Record of a download that was handed over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServedFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: u64,
}

/// Fetches single formats through an extractor into temporary storage
#[derive(Clone)]
pub struct Downloader {
    extractor: Arc<dyn MediaExtractor>,
    temp_dir: PathBuf,
}

impl Downloader {
    pub fn new(extractor: Arc<dyn MediaExtractor>, temp_dir: impl Into<PathBuf>) -> Self {
        Self {
            extractor,
            temp_dir: temp_dir.into(),
        }
    }

    /// Download exactly `format_id` of `url` into a fresh temporary file.
    ///
    /// `format_id` is not checked here; an id the extractor does not know
    /// comes back as [`AppError::Download`]. On failure the temporary file is
    /// already gone when this returns.
    pub async fn download(&self, url: &str, format_id: &str) -> Result<DownloadResult, AppError> {
        let file = tempfile::Builder::new()
            .prefix("vidgrab-")
            .suffix(".mp4")
            .tempfile_in(&self.temp_dir)
            .context("failed to create temporary file")
            .map_err(AppError::download)?;

        // Close our handle; the extractor writes through its own.
        let path = file.into_temp_path();
        debug!("Staging format {} in {}", format_id, path.display());

        match self.extractor.download(url, format_id, &path).await {
            Ok(info) => {
                let title = if info.title.trim().is_empty() {
                    "video".to_string()
                } else {
                    info.title
                };
                let ext = info
                    .ext
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| DEFAULT_EXT.to_string());
                info!("Downloaded '{}' ({}) as format {}", title, ext, format_id);

                Ok(DownloadResult {
                    file: path,
                    title,
                    ext,
                })
            }
            Err(e) => {
                error!("Download of format {} failed: {:#}", format_id, e);
                // dropping `path` removes the partial file
                Err(AppError::download(e))
            }
        }
    }
}

/// Stream a finished download into `sink`, then delete the temporary file.
///
/// The temporary file is removed whether or not the copy succeeds.
pub async fn serve<W>(result: DownloadResult, sink: &mut W) -> Result<ServedFile, AppError>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let file_name = result.file_name();
    let mime = result.mime();

    let copied = async {
        let mut file = tokio::fs::File::open(result.path())
            .await
            .context("failed to open downloaded file")?;
        let bytes = tokio::io::copy(&mut file, &mut *sink)
            .await
            .context("failed to write video")?;
        sink.flush().await.context("failed to write video")?;
        Ok::<u64, anyhow::Error>(bytes)
    }
    .await;

    let DownloadResult { file, .. } = result;
    if let Err(e) = file.close() {
        warn!("Failed to remove temporary file: {}", e);
    }

    let bytes = copied.map_err(AppError::download)?;
    info!("Served {} ({}, {} bytes)", file_name, mime, bytes);

    Ok(ServedFile {
        file_name,
        mime,
        bytes,
    })
}

/// Serve a finished download into a new file at `target`.
///
/// A target left incomplete by a failed copy is removed again; the temporary
/// file is deleted either way.
pub async fn serve_to_file(result: DownloadResult, target: &Path) -> Result<ServedFile, AppError> {
    let mut file = tokio::fs::File::create(target)
        .await
        .with_context(|| format!("failed to create {}", target.display()))
        .map_err(AppError::download)?;

    let served = serve(result, &mut file).await;
    if served.is_err() {
        drop(file);
        if let Err(e) = tokio::fs::remove_file(target).await {
            warn!("Failed to remove incomplete {}: {}", target.display(), e);
        }
    }
    served
}
