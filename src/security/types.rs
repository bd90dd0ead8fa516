//! Value types and error definitions shared by the security helpers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur in the fallible helpers.
///
/// Sanitization, upload validation and the header set are total and never
/// produce one of these.
#[derive(Debug, Error)]
pub enum ToolkitError {
    /// The OS random source could not supply bytes.
    #[error("Entropy source unavailable: {0}")]
    Entropy(#[from] rand::Error),

    /// Password bytes were not valid UTF-8.
    #[error("Password is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// A stored credential component is not valid hex.
    #[error("Invalid hex in {field}: {source}")]
    InvalidHex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },
}

/// Result type for toolkit operations.
pub type ToolkitResult<T> = Result<T, ToolkitError>;

/// A derived password key and the salt it was derived with, both hex-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordCredential {
    pub hash: String,
    pub salt: String,
}

/// File formats recognised by their leading magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Jpeg,
    Png,
    Gif,
    Pdf,
}

impl FileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Jpeg => "jpeg",
            FileKind::Png => "png",
            FileKind::Gif => "gif",
            FileKind::Pdf => "pdf",
        }
    }

    /// Returns true if `extension` (already lower-cased) names this kind.
    pub fn matches_extension(&self, extension: &str) -> bool {
        match self {
            FileKind::Jpeg => extension == "jpeg" || extension == "jpg",
            other => extension == other.as_str(),
        }
    }
}

/// Outcome of validating an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UploadVerdict {
    pub extension_allowed: bool,
    pub size_ok: bool,
    /// Informational unless the strict validator is used.
    pub type_matches: bool,
    pub safe: bool,
}
