//! Master-passphrase hashing and verification using Argon2id.
//!
//! The stored hash is a PHC string (salt and parameters embedded), so
//! verification needs nothing but the vault file.  This hash gates
//! access to the vault; it is unrelated to the symmetric key the cipher
//! derives from the same passphrase.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::errors::{PassVaultError, Result};

/// Hash a passphrase for storage.
///
/// Generates a fresh random salt, so hashing the same passphrase twice
/// produces different strings.
pub fn hash_passphrase(passphrase: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(passphrase.as_bytes(), &salt)
        .map_err(|e| PassVaultError::HashingFailed(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a passphrase against a stored PHC hash string.
///
/// Returns `Ok(false)` on a mismatch; errors only when the stored hash
/// itself is malformed.
pub fn verify_passphrase(stored_hash: &str, passphrase: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| PassVaultError::HashingFailed(format!("stored hash is malformed: {e}")))?;

    match Argon2::default().verify_password(passphrase.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PassVaultError::HashingFailed(e.to_string())),
    }
}
