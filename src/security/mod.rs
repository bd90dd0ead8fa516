//! Security helpers.
//!
//! # Overview
//! ```text
//! Untrusted input:
//!     → sanitize.rs (scrub SQL fragments, restrict charset)
//!     → upload.rs (extension, size, magic number)
//! Secrets:
//!     → token.rs (CSPRNG hex tokens)
//!     → password.rs (PBKDF2-HMAC-SHA256 hash and verify)
//! Responses:
//!     → headers.rs (fixed security header set, Axum layer)
//! ```
//!
//! # Design Decisions
//! - Defense in depth: none of these replace parameterized queries,
//!   authentication or access control
//! - Every helper is a free function with no shared state
//! - Fixed tables are constants

pub mod headers;
pub mod password;
pub mod sanitize;
pub mod token;
pub mod types;
pub mod upload;

pub use headers::{security_header_map, security_headers, with_security_headers, SECURITY_HEADERS};
pub use password::{hash_password, hash_password_bytes, verify_password, PBKDF2_ITERATIONS};
pub use sanitize::sanitize_sql_input;
pub use token::{generate_secure_token, DEFAULT_TOKEN_BYTES};
pub use types::{FileKind, PasswordCredential, ToolkitError, ToolkitResult, UploadVerdict};
pub use upload::{detect_file_kind, file_extension, validate_file_upload, validate_file_upload_strict};
