//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ToolkitConfig → Result<(), Vec<ValidationError>>

use std::fmt;

use crate::config::schema::ToolkitConfig;

/// Largest token length accepted from configuration, in bytes.
pub const MAX_TOKEN_LENGTH: usize = 1024;

/// A single semantic problem with a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check value ranges that serde cannot express.
pub fn validate_config(config: &ToolkitConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let length = config.tokens.default_length;
    if length == 0 || length > MAX_TOKEN_LENGTH {
        errors.push(ValidationError {
            field: "tokens.default_length",
            message: format!("must be between 1 and {}, got {}", MAX_TOKEN_LENGTH, length),
        });
    }

    if config.logging.level.trim().is_empty() {
        errors.push(ValidationError {
            field: "logging.level",
            message: "must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
