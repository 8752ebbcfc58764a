//! Data structures for media information reported by the extraction tool

use serde::{Deserialize, Deserializer, Serialize};

/// Codec value the extraction tool uses for "this stream has no such track"
pub const NO_CODEC: &str = "none";

/// Top-level media information
///
/// Returned both by the metadata query and by a completed download, in which
/// case `ext` is the container of the file that was written. `formats` is
/// `None` when the document lists no variants at all, as for a playlist page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub ext: Option<String>,
    #[serde(default)]
    pub formats: Option<Vec<FormatDescriptor>>,
}

/// One downloadable variant of a media item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatDescriptor {
    pub format_id: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub height: Option<u32>,
    #[serde(default)]
    pub ext: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub filesize: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub filesize_approx: Option<u64>,
    #[serde(default)]
    pub vcodec: Option<String>,
    #[serde(default)]
    pub acodec: Option<String>,
}

impl FormatDescriptor {
    /// Exact size when known, otherwise the estimate
    pub fn size_bytes(&self) -> Option<u64> {
        self.filesize.or(self.filesize_approx)
    }

    /// A missing codec field counts as present; only the "none" sentinel excludes.
    pub fn has_video(&self) -> bool {
        self.vcodec.as_deref() != Some(NO_CODEC)
    }

    pub fn has_audio(&self) -> bool {
        self.acodec.as_deref() != Some(NO_CODEC)
    }

    /// Both a video and an audio track in one stream
    pub fn is_muxed(&self) -> bool {
        self.has_video() && self.has_audio()
    }

    /// Height used for ordering; unknown heights sort as 0
    pub fn sort_height(&self) -> u32 {
        self.height.unwrap_or(0)
    }
}

// yt-dlp occasionally reports sizes and dimensions as floats
fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|v| v.is_finite() && *v >= 0.0).map(|v| v as u64))
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value
        .filter(|v| v.is_finite() && *v >= 0.0 && *v <= u32::MAX as f64)
        .map(|v| v as u32))
}
