//! Upload validation by extension, size and magic number.
//!
//! # Responsibilities
//! - Check the declared extension against an allowlist
//! - Enforce the maximum upload size
//! - Sniff leading bytes and compare with the declared extension
//!
//! # Design Decisions
//! - Pure function of (filename, content); no filesystem access
//! - Content with no recognised signature gets the benefit of the doubt
//! - `safe` does not include `type_matches`, so a spoofed extension with
//!   an allowed name passes; `validate_file_upload_strict` closes that gap

use crate::security::types::{FileKind, UploadVerdict};

/// Extensions accepted for upload. `txt` has no magic-number check.
pub const ALLOWED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "pdf", "txt"];

/// Maximum accepted upload size in bytes (5 MiB).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Leading-byte signatures, checked in order; the first match wins.
pub const MAGIC_NUMBERS: [(&[u8], FileKind); 4] = [
    (&[0xFF, 0xD8, 0xFF], FileKind::Jpeg),
    (&[0x89, 0x50, 0x4E, 0x47], FileKind::Png),
    (&[0x47, 0x49, 0x46], FileKind::Gif),
    (&[0x25, 0x50, 0x44, 0x46], FileKind::Pdf),
];

/// Lower-cased text after the last `.` in `filename`, or empty if there is none.
pub fn file_extension(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

/// Identify `content` by its leading bytes.
pub fn detect_file_kind(content: &[u8]) -> Option<FileKind> {
    MAGIC_NUMBERS
        .iter()
        .find(|(magic, _)| content.starts_with(magic))
        .map(|(_, kind)| *kind)
}

/// Validate an upload. `safe` is `extension_allowed && size_ok`.
pub fn validate_file_upload(filename: &str, content: &[u8]) -> UploadVerdict {
    let extension = file_extension(filename);
    let extension_allowed = ALLOWED_EXTENSIONS.contains(&extension.as_str());
    let size_ok = content.len() <= MAX_UPLOAD_BYTES;

    let detected = detect_file_kind(content);
    let type_matches = detected
        .map(|kind| kind.matches_extension(&extension))
        .unwrap_or(true);

    let verdict = UploadVerdict {
        extension_allowed,
        size_ok,
        type_matches,
        safe: extension_allowed && size_ok,
    };

    if !type_matches {
        tracing::warn!(
            filename,
            extension = %extension,
            detected = detected.map(|k| k.as_str()).unwrap_or("none"),
            "Upload content does not match declared extension"
        );
    }
    if !verdict.safe {
        tracing::warn!(
            filename,
            size = content.len(),
            extension_allowed,
            size_ok,
            "Upload rejected"
        );
    }

    verdict
}

/// Like [`validate_file_upload`], but `safe` also requires `type_matches`.
pub fn validate_file_upload_strict(filename: &str, content: &[u8]) -> UploadVerdict {
    let mut verdict = validate_file_upload(filename, content);
    verdict.safe = verdict.safe && verdict.type_matches;
    verdict
}
