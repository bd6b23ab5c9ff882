//! Supported file formats and filename helpers.
//!
//! The catalog drives server-side validation of requested target formats
//! and the category labels shown in the dashboard. Derived source formats
//! (from filenames and URLs) are computed here too so every crate guesses
//! the same way.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// FormatCategory
// ---------------------------------------------------------------------------

/// Category of a supported file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatCategory {
    Image,
    Video,
    Audio,
    Document,
    Spreadsheet,
    Archive,
}

impl FormatCategory {
    pub const ALL: [FormatCategory; 6] = [
        FormatCategory::Image,
        FormatCategory::Video,
        FormatCategory::Audio,
        FormatCategory::Document,
        FormatCategory::Spreadsheet,
        FormatCategory::Archive,
    ];

    /// Human-readable category label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Document => "Document",
            Self::Spreadsheet => "Spreadsheet",
            Self::Archive => "Archive",
        }
    }

    /// Extensions belonging to this category, lowercase.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Image => &["jpg", "jpeg", "png", "gif", "bmp", "svg", "webp", "tiff"],
            Self::Video => &["mp4", "avi", "mov", "wmv", "flv", "webm", "mkv", "3gp"],
            Self::Audio => &["mp3", "wav", "flac", "aac", "ogg", "wma", "m4a"],
            Self::Document => &["pdf", "docx", "doc", "txt", "rtf", "odt"],
            Self::Spreadsheet => &["xlsx", "xls", "csv", "ods"],
            Self::Archive => &["zip", "rar", "7z", "tar", "gz"],
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog lookups
// ---------------------------------------------------------------------------

/// Look up the category for a file extension, case-insensitively.
pub fn category_for(extension: &str) -> Option<FormatCategory> {
    let ext = extension.to_ascii_lowercase();
    FormatCategory::ALL
        .into_iter()
        .find(|category| category.extensions().contains(&ext.as_str()))
}

/// Every supported extension across all categories.
pub fn all_formats() -> Vec<&'static str> {
    FormatCategory::ALL
        .into_iter()
        .flat_map(|category| category.extensions().iter().copied())
        .collect()
}

/// Whether an extension appears in the catalog, case-insensitively.
pub fn is_supported_format(extension: &str) -> bool {
    category_for(extension).is_some()
}

/// Validate a requested target format against the catalog.
pub fn validate_target_format(format: &str) -> Result<(), CoreError> {
    if is_supported_format(format) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unsupported target format: {format}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Filename helpers
// ---------------------------------------------------------------------------

/// Lowercased extension of a filename, or empty when it has none.
pub fn file_extension(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Best-effort filename for a URL submission: the last path segment with
/// any query or fragment stripped, falling back to `"file"`.
pub fn filename_from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => "file".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Catalog -------------------------------------------------------------

    #[test]
    fn category_lookup_is_case_insensitive() {
        assert_eq!(category_for("pdf"), Some(FormatCategory::Document));
        assert_eq!(category_for("PDF"), Some(FormatCategory::Document));
        assert_eq!(category_for("Mp4"), Some(FormatCategory::Video));
    }

    #[test]
    fn unknown_extension_has_no_category() {
        assert_eq!(category_for("exe"), None);
        assert_eq!(category_for(""), None);
    }

    #[test]
    fn all_formats_covers_every_category() {
        let formats = all_formats();
        assert_eq!(formats.len(), 38);
        assert!(formats.contains(&"jpg"));
        assert!(formats.contains(&"mkv"));
        assert!(formats.contains(&"flac"));
        assert!(formats.contains(&"odt"));
        assert!(formats.contains(&"csv"));
        assert!(formats.contains(&"7z"));
    }

    #[test]
    fn validate_target_format_accepts_supported() {
        assert!(validate_target_format("pdf").is_ok());
        assert!(validate_target_format("WEBP").is_ok());
    }

    #[test]
    fn validate_target_format_rejects_unsupported() {
        let err = validate_target_format("exe").unwrap_err();
        assert!(err.to_string().contains("exe"));
    }

    // -- Filename helpers ----------------------------------------------------

    #[test]
    fn file_extension_lowercases() {
        assert_eq!(file_extension("report.PDF"), "pdf");
        assert_eq!(file_extension("clip.mp4"), "mp4");
    }

    #[test]
    fn file_extension_takes_last_component() {
        assert_eq!(file_extension("archive.tar.gz"), "gz");
    }

    #[test]
    fn file_extension_empty_when_no_dot() {
        assert_eq!(file_extension("file"), "");
    }

    #[test]
    fn filename_from_url_takes_last_segment() {
        assert_eq!(
            filename_from_url("https://example.com/media/clip.mp4"),
            "clip.mp4"
        );
    }

    #[test]
    fn filename_from_url_strips_query_and_fragment() {
        assert_eq!(
            filename_from_url("https://example.com/a/song.mp3?token=abc"),
            "song.mp3"
        );
        assert_eq!(
            filename_from_url("https://example.com/a/doc.pdf#page=2"),
            "doc.pdf"
        );
    }

    #[test]
    fn filename_from_url_falls_back_on_empty_segment() {
        assert_eq!(filename_from_url("https://example.com/"), "file");
        assert_eq!(filename_from_url(""), "file");
    }
}
