//! Display labels for format descriptors and the mapping back to their ids

use crate::extractor::FormatDescriptor;
use crate::utils::size::format_size;
use std::fmt;

const FORMAT_MARKER: &str = "(format ";

/// Build the label shown for one format:
/// "<height>p - <ext> - <size> (format <id>)"
pub fn display_label(format: &FormatDescriptor) -> String {
    let height = format
        .height
        .map(|h| h.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    format!(
        "{}p - {} - {} {}{})",
        height,
        format.ext,
        format_size(format.size_bytes()),
        FORMAT_MARKER,
        format.format_id
    )
}

/// Recover the format id from a label built by [`display_label`], e.g. one
/// pasted back from `--list-formats` output.
///
/// The id runs from after the last "(format " marker to the label's closing
/// ")", its final character once surrounding whitespace is trimmed. Taking
/// the last marker means parentheses in the container or size never confuse
/// it.
pub fn parse_format_id(label: &str) -> Option<&str> {
    let label = label.trim();
    let start = label.rfind(FORMAT_MARKER)? + FORMAT_MARKER.len();
    label[start..].strip_suffix(')')
}

/// One entry of the format pick list
///
/// Carries the originating id next to its label so a selection never has to
/// be parsed back out of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOption {
    pub label: String,
    pub format_id: String,
}

impl FormatOption {
    pub fn new(format: &FormatDescriptor) -> Self {
        Self {
            label: display_label(format),
            format_id: format.format_id.clone(),
        }
    }
}

impl fmt::Display for FormatOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Options for every format, in the same order
pub fn build_options(formats: &[FormatDescriptor]) -> Vec<FormatOption> {
    formats.iter().map(FormatOption::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn descriptor(id: &str, height: Option<u32>, ext: &str) -> FormatDescriptor {
        FormatDescriptor {
            format_id: id.to_string(),
            height,
            ext: ext.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_label_with_exact_size() {
        let f = FormatDescriptor {
            filesize: Some(52_428_800),
            ..descriptor("22", Some(1080), "mp4")
        };
        assert_eq!(display_label(&f), "1080p - mp4 - 50.00 MB (format 22)");
    }

    #[test]
    fn test_label_falls_back_to_estimate() {
        let f = FormatDescriptor {
            filesize_approx: Some(31_457_280),
            ..descriptor("18", Some(720), "mp4")
        };
        assert_eq!(display_label(&f), "720p - mp4 - 30.00 MB (format 18)");
    }

    #[test]
    fn test_label_with_unknown_height_and_size() {
        let f = descriptor("hls-1", None, "mp4");
        assert_eq!(display_label(&f), "unknownp - mp4 - unknown size (format hls-1)");
    }

    #[test]
    fn test_parse_plain_label() {
        assert_eq!(parse_format_id("1080p - mp4 - 50.00 MB (format 137)"), Some("137"));
        assert_eq!(parse_format_id("no marker here"), None);
    }

    #[test]
    fn test_parse_pasted_line_with_newline() {
        assert_eq!(parse_format_id("720p - mp4 - 30.00 MB (format 22)\n"), Some("22"));
    }

    #[test]
    fn test_parse_keeps_parentheses_inside_id() {
        let f = descriptor("(weird) id", Some(480), "webm");
        assert_eq!(parse_format_id(&display_label(&f)), Some("(weird) id"));
    }

    #[test]
    fn test_parse_survives_marker_in_other_fields() {
        let f = descriptor("137", Some(1080), "mp4 (format x)");
        let label = display_label(&f);
        assert_eq!(parse_format_id(&label), Some("137"));
    }

    #[test]
    fn test_option_keeps_id_and_label() {
        let f = descriptor("(weird) id", Some(480), "webm");
        let option = FormatOption::new(&f);
        assert_eq!(option.format_id, "(weird) id");
        assert_eq!(option.to_string(), option.label);
    }

    proptest! {
        #[test]
        fn prop_label_roundtrip(
            id in "[ -~]{1,16}",
            ext in "[ -~]{0,12}",
            height in proptest::option::of(any::<u32>()),
            size in proptest::option::of(any::<u64>()),
        ) {
            // ids containing the marker itself are not produced by extractors
            prop_assume!(!id.contains(FORMAT_MARKER));
            let f = FormatDescriptor {
                format_id: id.clone(),
                height,
                ext,
                filesize: size,
                ..Default::default()
            };
            let label = display_label(&f);
            prop_assert_eq!(parse_format_id(&label), Some(id.as_str()));
        }
    }
}
