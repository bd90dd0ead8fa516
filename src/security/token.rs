//! Secure random tokens.
//!
//! # Design Decisions
//! - Bytes are drawn from the OS CSPRNG only (`OsRng`)
//! - Entropy failure is an error, never a fallback to a weaker generator
//! - Length is a byte count; the hex output is twice as long

use rand::rngs::OsRng;
use rand::RngCore;

use crate::security::types::ToolkitResult;

/// Default number of random bytes in a token.
pub const DEFAULT_TOKEN_BYTES: usize = 32;

/// Fill a fresh buffer of `len` bytes from the OS random source.
pub fn random_bytes(len: usize) -> ToolkitResult<Vec<u8>> {
    let mut buf = vec![0u8; len];
    if let Err(e) = OsRng.try_fill_bytes(&mut buf) {
        tracing::error!(error = %e, requested = len, "OS entropy source failed");
        return Err(e.into());
    }
    Ok(buf)
}

/// Generate a hex token from `length` cryptographically random bytes.
pub fn generate_secure_token(length: usize) -> ToolkitResult<String> {
    let bytes = random_bytes(length)?;
    Ok(hex::encode(bytes))
}
