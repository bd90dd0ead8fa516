//! Salted password hashing with PBKDF2-HMAC-SHA256.
//!
//! # Design Decisions
//! - Algorithm, iteration count and key length are fixed constants shared by
//!   the hash and verify paths
//! - The salt is returned alongside the hash; verification needs both
//! - Verification compares digests in constant time

use sha2::Sha256;

use crate::security::token::random_bytes;
use crate::security::types::{PasswordCredential, ToolkitError, ToolkitResult};

/// PBKDF2 iteration count.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Length of a freshly generated salt, in bytes.
pub const SALT_BYTES: usize = 32;

/// Derived key length; equal to the SHA-256 digest size.
pub const KEY_BYTES: usize = 32;

fn derive_key(password: &[u8], salt: &[u8]) -> [u8; KEY_BYTES] {
    let mut key = [0u8; KEY_BYTES];
    pbkdf2::pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ITERATIONS, &mut key);
    key
}

/// Hash `password` with `salt`, or with a fresh random salt when none is given.
pub fn hash_password(password: &str, salt: Option<&[u8]>) -> ToolkitResult<PasswordCredential> {
    let salt = match salt {
        Some(s) => s.to_vec(),
        None => random_bytes(SALT_BYTES)?,
    };

    tracing::debug!(
        iterations = PBKDF2_ITERATIONS,
        salt_len = salt.len(),
        "Deriving password hash"
    );
    let key = derive_key(password.as_bytes(), &salt);

    Ok(PasswordCredential {
        hash: hex::encode(key),
        salt: hex::encode(salt),
    })
}

/// Like [`hash_password`], for passwords that arrive as raw bytes.
///
/// Non-UTF-8 input is rejected instead of being lossily converted.
pub fn hash_password_bytes(
    password: &[u8],
    salt: Option<&[u8]>,
) -> ToolkitResult<PasswordCredential> {
    let password = std::str::from_utf8(password)?;
    hash_password(password, salt)
}

/// Check `password` against a stored credential.
pub fn verify_password(password: &str, credential: &PasswordCredential) -> ToolkitResult<bool> {
    let salt = hex::decode(&credential.salt)
        .map_err(|source| ToolkitError::InvalidHex { field: "salt", source })?;
    let expected = hex::decode(&credential.hash)
        .map_err(|source| ToolkitError::InvalidHex { field: "hash", source })?;

    let key = derive_key(password.as_bytes(), &salt);
    Ok(constant_time_eq(&key, &expected))
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
