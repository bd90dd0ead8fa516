//! Configuration schema definitions.
//!
//! Configuration only tunes the `remediate` binary: log output, default token
//! length and upload strictness. The security tables themselves are constants
//! and cannot be changed here.

use serde::{Deserialize, Serialize};

use crate::security::DEFAULT_TOKEN_BYTES;

/// Root configuration for the toolkit CLI.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Logging settings.
    pub logging: LoggingConfig,

    /// Token generation defaults.
    pub tokens: TokenConfig,

    /// Upload validation settings.
    pub uploads: UploadConfig,
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Full,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or filter directive (e.g. "info", "secure_remediation=debug").
    pub level: String,

    /// Log line format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

/// Token generation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Random bytes per token when `--length` is not given.
    pub default_length: usize,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            default_length: DEFAULT_TOKEN_BYTES,
        }
    }
}

/// Upload validation configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct UploadConfig {
    /// Require the magic number to agree with the extension.
    pub strict: bool,
}
