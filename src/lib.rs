//! Web application security remediation helpers.
//!
//! Stateless, defense-in-depth utilities: SQL input scrubbing, CSPRNG tokens,
//! PBKDF2 password hashing, upload validation and security response headers.
//! None of them replace parameterized queries or access control.

pub mod config;
pub mod observability;
pub mod security;

pub use config::ToolkitConfig;
pub use security::{
    generate_secure_token, hash_password, sanitize_sql_input, security_headers,
    validate_file_upload, verify_password, PasswordCredential, ToolkitError, ToolkitResult,
    UploadVerdict,
};
